//! Row checkbox selection with a master "select all" checkbox.

use std::collections::HashSet;
use std::hash::Hash;

/// ID-based checkbox state for a list of rows.
///
/// Rows keep the order they were given in. The master flag is derived from
/// the rows and is never used to infer them, except through
/// [`set_all`](Self::set_all).
#[derive(Debug, Clone)]
pub struct SelectionTracker<K> {
    /// Row ids in display order.
    ids: Vec<K>,
    /// Currently selected ids.
    selected: HashSet<K>,
    /// Master checkbox state.
    all_selected: bool,
}

impl<K: Eq + Hash + Clone> SelectionTracker<K> {
    /// Creates a tracker with every row unselected.
    pub fn new(ids: impl IntoIterator<Item = K>) -> Self {
        let mut seen = HashSet::new();
        let ids = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        Self {
            ids,
            selected: HashSet::new(),
            all_selected: false,
        }
    }

    /// Number of rows tracked.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Row ids in display order.
    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// State of the master checkbox.
    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in display order.
    pub fn selected(&self) -> Vec<K> {
        self.ids
            .iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }

    /// Master checkbox clicked: every row follows it.
    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.selected.extend(self.ids.iter().cloned());
        } else {
            self.selected.clear();
        }
        self.all_selected = checked && !self.ids.is_empty();
        log::debug!("Selection set_all({}) over {} rows", checked, self.ids.len());
    }

    /// Row checkbox clicked. Returns the row's new state, or `None` for an
    /// unknown id (nothing changes).
    pub fn toggle_row(&mut self, id: &K) -> Option<bool> {
        if !self.ids.contains(id) {
            return None;
        }

        let now_selected = if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        };

        self.all_selected = self.scan_all_selected();
        Some(now_selected)
    }

    /// Unselect every row.
    /// Returns the ids that were deselected, in display order.
    pub fn clear(&mut self) -> Vec<K> {
        let removed = self.selected();
        self.selected.clear();
        self.all_selected = false;
        removed
    }

    /// AND over all rows; the first unselected row ends the scan.
    fn scan_all_selected(&self) -> bool {
        !self.ids.is_empty() && self.ids.iter().all(|id| self.selected.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(n: usize) -> SelectionTracker<usize> {
        SelectionTracker::new(0..n)
    }

    #[test]
    fn test_starts_unselected() {
        let t = tracker(7);
        assert_eq!(t.len(), 7);
        assert_eq!(t.selected_count(), 0);
        assert!(!t.is_all_selected());
    }

    #[test]
    fn test_set_all_then_toggle_one() {
        let mut t = tracker(7);
        t.set_all(true);
        assert!(t.is_all_selected());
        assert_eq!(t.selected_count(), 7);

        assert_eq!(t.toggle_row(&3), Some(false));
        assert!(!t.is_all_selected());
        assert!(!t.is_selected(&3));
        assert!(t.is_selected(&4));

        assert_eq!(t.toggle_row(&3), Some(true));
        assert!(t.is_all_selected());
    }

    #[test]
    fn test_toggling_every_row_sets_master() {
        let mut t = tracker(3);
        t.toggle_row(&0);
        t.toggle_row(&1);
        assert!(!t.is_all_selected());
        t.toggle_row(&2);
        assert!(t.is_all_selected());
    }

    #[test]
    fn test_set_all_false_clears() {
        let mut t = tracker(4);
        t.toggle_row(&1);
        t.set_all(false);
        assert_eq!(t.selected_count(), 0);
        assert!(!t.is_all_selected());
    }

    #[test]
    fn test_empty_list_never_all_selected() {
        let mut t = tracker(0);
        t.set_all(true);
        assert!(!t.is_all_selected());
        assert!(t.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut t = tracker(2);
        t.set_all(true);
        assert_eq!(t.toggle_row(&9), None);
        assert!(t.is_all_selected());
        assert_eq!(t.selected_count(), 2);
    }

    #[test]
    fn test_string_ids_keep_display_order() {
        let mut t = SelectionTracker::new(["carter", "asher", "matthew", "asher"].map(String::from));
        assert_eq!(t.len(), 3);
        t.toggle_row(&"matthew".to_string());
        t.toggle_row(&"carter".to_string());
        assert_eq!(t.selected(), vec!["carter".to_string(), "matthew".to_string()]);

        let removed = t.clear();
        assert_eq!(removed.len(), 2);
        assert_eq!(t.selected_count(), 0);
    }
}
