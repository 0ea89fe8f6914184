//! Demo staff roster and its text rendering.

use std::fmt::Write;

use clinic_lib::list::ListPager;
use clinic_lib::list::SelectionTracker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub name: &'static str,
    pub designation: &'static str,
    pub mobile: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub joined: &'static str,
}

const fn nurse(name: &'static str) -> StaffMember {
    StaffMember {
        name,
        designation: "Nurse",
        mobile: "9876512345",
        email: "gabriel@gmail.com",
        address: "1310 Glenwood Avenue",
        joined: "22 Mar 2021",
    }
}

pub const STAFF: [StaffMember; 7] = [
    nurse("JOHN D RANDOLPH"),
    nurse("Matthew"),
    nurse("David Anthony"),
    nurse("Anthony David"),
    nurse("Asher Anthony"),
    nurse("Carter Anthony"),
    nurse("JOHN D RANDOLPH"),
];

/// Paging and checkbox state of the staff list, keyed by row index.
#[derive(Debug, Clone)]
pub struct StaffView<'a> {
    rows: &'a [StaffMember],
    pub pager: ListPager,
    pub selection: SelectionTracker<usize>,
}

impl<'a> StaffView<'a> {
    pub fn new(rows: &'a [StaffMember], page_size: usize) -> Self {
        Self {
            rows,
            pager: ListPager::for_rows(rows, page_size),
            selection: SelectionTracker::new(0..rows.len()),
        }
    }

    /// Renders the current page as a text table with its footer.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let master = checkbox(self.selection.is_all_selected());

        let _ = writeln!(
            out,
            "{} {:>3}  {:<18} {:<12} {:<20} {:<12} {:<22} {}",
            master, "#", "Name", "Designation", "Email", "Mobile", "Address", "Joining Date"
        );

        let range = self.pager.visible_range();
        for (offset, member) in self.pager.visible_rows(self.rows).iter().enumerate() {
            let index = range.start + offset;
            let _ = writeln!(
                out,
                "{} {:>3}  {:<18} {:<12} {:<20} {:<12} {:<22} {}",
                checkbox(self.selection.is_selected(&index)),
                index + 1,
                member.name,
                member.designation,
                member.email,
                member.mobile,
                member.address,
                member.joined,
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.pager.summary());
        let _ = write!(out, "{}", self.page_bar());
        out
    }

    /// `Previous 1 [2] 3 Next`, with unavailable directions in parentheses.
    fn page_bar(&self) -> String {
        let mut parts = Vec::new();
        parts.push(if self.pager.has_previous() {
            "Previous".to_string()
        } else {
            "(Previous)".to_string()
        });
        for number in self.pager.page_numbers() {
            if number == self.pager.current_page() + 1 {
                parts.push(format!("[{}]", number));
            } else {
                parts.push(number.to_string());
            }
        }
        parts.push(if self.pager.has_next() {
            "Next".to_string()
        } else {
            "(Next)".to_string()
        });
        parts.join(" ")
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
