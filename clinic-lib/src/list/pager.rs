//! Fixed-size paging over a list of rows.

use std::ops::Range;

/// Splits `total_rows` rows into pages of `page_size` and tracks the page on screen.
///
/// Invariant: whenever `total_rows > 0`, `current_page * page_size < total_rows`.
/// Every navigation call clamps to keep it.
///
/// # Example
///
/// ```
/// use clinic_lib::list::ListPager;
///
/// let mut pager = ListPager::new(7, 3);
/// assert_eq!(pager.page_count(), 3);
///
/// pager.go_to_page(2);
/// assert_eq!(pager.visible_range(), 6..7);
/// assert_eq!(pager.summary(), "Showing 7 to 7 of 7 entries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPager {
    page_size: usize,
    current_page: usize,
    total_rows: usize,
}

impl ListPager {
    /// Creates a pager positioned on the first page.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(total_rows: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
            total_rows,
        }
    }

    /// Creates a pager over a caller-owned row slice.
    pub fn for_rows<T>(rows: &[T], page_size: usize) -> Self {
        Self::new(rows.len(), page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the page on screen.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of pages, `0` for an empty list.
    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size)
    }

    /// Index of the last valid page (`0` when the list is empty).
    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Moves to page `n`, clamped to the valid page range.
    pub fn go_to_page(&mut self, n: usize) {
        let page = n.min(self.last_page());
        if page != n {
            log::debug!(
                "Page {} out of range for {} pages, clamped to {}",
                n,
                self.page_count(),
                page
            );
        }
        self.current_page = page;
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Advances one page. Returns `false` (and does nothing) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Goes back one page. Returns `false` (and does nothing) on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Half-open index range of the rows on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        // The page invariant keeps `start <= total_rows`, so neither step overflows.
        let start = self.current_page * self.page_size;
        let end = start + self.page_size.min(self.total_rows - start);
        start..end
    }

    /// Returns `true` if row `index` is on the current page.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Shown/hidden flag for every row, in row order.
    pub fn visibility(&self) -> Vec<bool> {
        let range = self.visible_range();
        (0..self.total_rows).map(|i| range.contains(&i)).collect()
    }

    /// The slice of `rows` that falls on the current page.
    ///
    /// `rows` shorter than `total_rows` yields whatever overlap exists.
    pub fn visible_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let start = range.start.min(rows.len());
        let end = range.end.min(rows.len());
        &rows[start..end]
    }

    /// 1-based labels for the page buttons.
    pub fn page_numbers(&self) -> Range<usize> {
        1..self.page_count() + 1
    }

    /// Footer text, e.g. `Showing 1 to 7 of 12 entries`.
    pub fn summary(&self) -> String {
        let range = self.visible_range();
        let first = if range.is_empty() { 0 } else { range.start + 1 };
        format!(
            "Showing {} to {} of {} entries",
            first, range.end, self.total_rows
        )
    }

    /// Updates the row count after the list changed, keeping the current page valid.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        let page = self.current_page;
        self.go_to_page(page);
    }
}
