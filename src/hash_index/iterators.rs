use std::slice::Iter as SliceIter;

use super::table::{HashEntry, HashIndex};

pub struct Iter<'a> {
    slots: SliceIter<'a, Option<HashEntry>>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(slots: &'a [Option<HashEntry>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a HashEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Option::as_ref)
    }
}

impl<'a> IntoIterator for &'a HashIndex {
    type Item = &'a HashEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_only_occupied_slots() {
        let mut table = HashIndex::new(13).expect("Failed to create table");
        table.insert("hello", 1).expect("Failed to insert");
        table.insert("world", 2).expect("Failed to insert");
        table.insert("hello", 3).expect("Failed to insert");

        let mut words: Vec<_> = table.iter().map(|e| e.word().to_string()).collect();
        words.sort();

        assert_eq!(words, vec!["hello".to_string(), "world".to_string()]);
        assert_eq!((&table).into_iter().count(), table.entries());
    }

    #[test]
    fn empty_table() {
        let table = HashIndex::new(5).expect("Failed to create table");

        assert!(table.iter().next().is_none());
    }
}
