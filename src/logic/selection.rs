use crate::state::types::{RecordId, SelectionChange};

/// Maximum number of vehicles in a side-by-side comparison.
pub const COMPARE_CAPACITY: usize = 3;

/// Minimum number of vehicles needed to build a comparison.
pub const COMPARE_MINIMUM: usize = 2;

/// Bounded, insertion-ordered set of record ids picked for comparison.
///
/// Only ids are kept; records are resolved against the store when the
/// comparison is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    /// Selected ids in insertion order, unique, at most `COMPARE_CAPACITY`.
    ids: Vec<RecordId>,
}

impl SelectionSet {
    /// Empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// What: Add `id` if absent, remove it if present.
    ///
    /// Inputs:
    /// - `id`: Record id from the grid
    ///
    /// Output:
    /// - `Removed` when it was selected, `Added` when appended, `RejectedCapacity`
    ///   when the set is full (state unchanged).
    pub fn toggle(&mut self, id: RecordId) -> SelectionChange {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            return SelectionChange::Removed;
        }
        if self.ids.len() >= COMPARE_CAPACITY {
            tracing::debug!(id, capacity = COMPARE_CAPACITY, "[Compare] Selection full");
            return SelectionChange::RejectedCapacity;
        }
        self.ids.push(id);
        SelectionChange::Added
    }

    /// Empty the selection and return how many ids it held.
    pub fn clear(&mut self) -> usize {
        let n = self.ids.len();
        self.ids.clear();
        n
    }

    /// Whether enough ids are selected to build a comparison.
    #[must_use]
    pub const fn compare_eligible(&self) -> bool {
        self.ids.len() >= COMPARE_MINIMUM
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Number of selected ids.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggling the same id twice adds then removes it
    ///
    /// - Input: toggle(5) twice
    /// - Output: `Added`, `Removed`; set empty afterwards
    fn toggle_twice_is_idempotent() {
        let mut sel = SelectionSet::new();
        assert_eq!(sel.toggle(5), SelectionChange::Added);
        assert!(sel.contains(5));
        assert_eq!(sel.toggle(5), SelectionChange::Removed);
        assert!(sel.is_empty());
    }

    #[test]
    /// What: A fourth distinct id is rejected without mutating the set
    ///
    /// - Input: ids 1, 2, 3 then 4
    /// - Output: `RejectedCapacity`; set still `[1, 2, 3]`
    fn fourth_id_rejected_at_capacity() {
        let mut sel = SelectionSet::new();
        for id in 1..=3 {
            assert_eq!(sel.toggle(id), SelectionChange::Added);
        }
        assert_eq!(sel.toggle(4), SelectionChange::RejectedCapacity);
        assert_eq!(sel.ids(), &[1, 2, 3]);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    /// What: Removing from a full set is still allowed and frees a slot
    fn remove_from_full_set_frees_slot() {
        let mut sel = SelectionSet::new();
        for id in [7, 8, 9] {
            sel.toggle(id);
        }
        assert_eq!(sel.toggle(8), SelectionChange::Removed);
        assert_eq!(sel.toggle(10), SelectionChange::Added);
        assert_eq!(sel.ids(), &[7, 9, 10]);
    }

    #[test]
    /// What: Eligibility starts at two ids and clear reports the previous size
    fn eligibility_and_clear() {
        let mut sel = SelectionSet::new();
        assert!(!sel.compare_eligible());
        sel.toggle(1);
        assert!(!sel.compare_eligible());
        sel.toggle(2);
        assert!(sel.compare_eligible());
        assert_eq!(sel.clear(), 2);
        assert_eq!(sel.clear(), 0);
        assert!(!sel.compare_eligible());
    }
}
