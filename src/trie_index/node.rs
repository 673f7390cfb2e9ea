use crate::occurrences::{OccurrenceList, Position};

use super::normalize::ALPHABET_SIZE;

#[derive(Debug)]
pub struct TrieNode {
    pub(super) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(super) is_end_of_word: bool,
    pub(super) occurrences: OccurrenceList,
    /// Surface form of the first word that ended here.
    pub(super) original_word: Option<String>,
    /// Raw character that created this node.
    pub(super) label: Option<String>,
}

impl TrieNode {
    pub(super) fn new(label: Option<char>, occurrence_capacity: usize) -> Self {
        Self {
            children: Default::default(),
            is_end_of_word: false,
            occurrences: OccurrenceList::with_capacity(occurrence_capacity),
            original_word: None,
            label: label.map(String::from),
        }
    }

    pub const fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn original_word(&self) -> Option<&str> {
        self.original_word.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn occurrences(&self) -> &[Position] {
        self.occurrences.as_slice()
    }

    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)?.as_deref()
    }

    /// Present children with their slot index, in alphabet order.
    pub fn children(&self) -> impl Iterator<Item = (usize, &Self)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|node| (index, node)))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}
