use serde::Serialize;

use crate::config::OCCURRENCE_CAPACITY;

/// 1-based ordinal of a token in the corpus.
pub type Position = u32;

/// Ascending, duplicate-free list of positions.
///
/// Storage grows by doubling and never shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccurrenceList {
    positions: Vec<Position>,
}

impl Default for OccurrenceList {
    fn default() -> Self {
        Self::with_capacity(OCCURRENCE_CAPACITY)
    }
}

impl OccurrenceList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Inserts `position` keeping the list sorted.
    ///
    /// Returns `false` when the position was already present.
    pub fn insert(&mut self, position: Position) -> bool {
        if self.positions.contains(&position) {
            return false;
        }

        self.grow_if_full();

        // Shift larger positions one slot right, then drop the new one in the gap
        let mut i = self.positions.len();
        self.positions.push(position);
        while i > 0 && self.positions[i - 1] > position {
            self.positions[i] = self.positions[i - 1];
            i -= 1;
        }
        self.positions[i] = position;

        true
    }

    /// Appends `position`, which callers expect to be past the current tail.
    ///
    /// Falls back to [`OccurrenceList::insert`] otherwise so the list stays ordered.
    pub fn push(&mut self, position: Position) -> bool {
        match self.positions.last() {
            Some(&last) if last >= position => self.insert(position),
            _ => {
                self.grow_if_full();
                self.positions.push(position);
                true
            }
        }
    }

    fn grow_if_full(&mut self) {
        if self.positions.len() == self.positions.capacity() {
            let capacity = self.positions.capacity();
            self.positions.reserve_exact(capacity);
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.positions.capacity()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn insert_keeps_order() {
        let mut list = OccurrenceList::default();

        for position in [5, 1, 9, 3, 7] {
            assert!(list.insert(position));
        }

        assert_eq!(list.as_slice(), &[1, 3, 5, 7, 9]);
    }

    #[test]
    fn insert_skips_duplicates() {
        let mut list = OccurrenceList::default();

        assert!(list.insert(4));
        assert!(!list.insert(4));
        assert!(list.insert(2));
        assert!(!list.insert(2));

        assert_eq!(list.as_slice(), &[2, 4]);
    }

    #[test]
    fn push_appends_and_recovers_order() {
        let mut list = OccurrenceList::default();

        assert!(list.push(1));
        assert!(list.push(8));
        assert!(list.push(3));
        assert!(!list.push(8));

        assert_eq!(list.as_slice(), &[1, 3, 8]);
    }

    #[test]
    fn capacity_doubles() {
        let mut list = OccurrenceList::with_capacity(10);
        assert!(list.capacity() >= 10);

        for position in 1..=11 {
            list.push(position);
        }

        assert!(list.capacity() >= 20);
        assert_eq!(list.len(), 11);
    }

    proptest! {
        #[test]
        fn always_strictly_ascending(positions in prop::collection::vec(1u32..500, 0..200)) {
            let mut list = OccurrenceList::default();
            for &position in &positions {
                list.insert(position);
            }

            prop_assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
            for &position in &positions {
                prop_assert!(list.contains(position));
            }
        }
    }
}
