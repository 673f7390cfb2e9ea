use crate::{config::IndexConfig, occurrences::Position};

use super::{node::TrieNode, normalize::child_index};

/// A stored word as reported by the trie: its original spelling and positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieWord<'a> {
    pub word: &'a str,
    pub occurrences: &'a [Position],
}

#[derive(Debug)]
pub struct TrieIndex {
    root: TrieNode,
    occurrence_capacity: usize,
    num_words: usize,
    num_nodes: usize,
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieIndex {
    pub fn new() -> Self {
        Self::with_config(&IndexConfig::default())
    }

    pub fn with_config(config: &IndexConfig) -> Self {
        Self {
            root: TrieNode::new(None, config.occurrence_capacity),
            occurrence_capacity: config.occurrence_capacity,
            num_words: 0,
            num_nodes: 1,
        }
    }

    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes marked as end of word.
    pub const fn len(&self) -> usize {
        self.num_words
    }

    pub const fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Number of allocated nodes, root included.
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Records `position` for `word`.
    ///
    /// Positions are appended; the builder feeds them in ascending order per
    /// keyword. Returns `false` when no character of `word` folds onto the
    /// alphabet, in which case nothing is stored.
    pub fn insert(&mut self, word: &str, position: Position) -> bool {
        let capacity = self.occurrence_capacity;
        let mut created = 0;
        let mut depth = 0;
        let mut current = &mut self.root;

        for c in word.chars() {
            let Some(index) = child_index(c) else { continue };

            current = &mut **current.children[index].get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::new(Some(c), capacity))
            });
            depth += 1;
        }

        if depth == 0 {
            return false;
        }

        if !current.is_end_of_word {
            current.is_end_of_word = true;
            self.num_words += 1;
        }
        if current.original_word.is_none() {
            current.original_word = Some(word.to_string());
        }
        current.occurrences.push(position);

        self.num_nodes += created;

        true
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        let mut depth = 0;

        for c in word.chars() {
            let Some(index) = child_index(c) else { continue };

            current = current.child(index)?;
            depth += 1;
        }

        (depth > 0 && current.is_end_of_word).then_some(current)
    }

    /// Original spelling and positions of the word `word` folds onto.
    pub fn get(&self, word: &str) -> Option<TrieWord<'_>> {
        let node = self.find(word)?;

        Some(TrieWord {
            word: node.original_word()?,
            occurrences: node.occurrences(),
        })
    }

    pub fn search(&self, word: &str) -> Option<&[Position]> {
        self.find(word).map(TrieNode::occurrences)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Every stored word in pre-order, i.e. sorted by folded spelling.
    pub fn words(&self) -> Vec<TrieWord<'_>> {
        let mut words = Vec::with_capacity(self.num_words);
        collect_words(&self.root, &mut words);

        words
    }
}

fn collect_words<'a>(node: &'a TrieNode, words: &mut Vec<TrieWord<'a>>) {
    if node.is_end_of_word() {
        if let Some(word) = node.original_word() {
            words.push(TrieWord {
                word,
                occurrences: node.occurrences(),
            });
        }
    }

    for (_, child) in node.children() {
        collect_words(child, words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_and_case_folding() {
        let mut trie = TrieIndex::new();
        trie.insert("café", 4);

        assert_eq!(trie.search("CAFE"), Some(&[4][..]));
        assert_eq!(trie.search("Café"), Some(&[4][..]));
        assert_eq!(trie.get("cafe").map(|w| w.word), Some("café"));
    }

    #[test]
    fn first_surface_form_wins() {
        let mut trie = TrieIndex::new();
        trie.insert("Apple", 1);
        trie.insert("apple", 2);
        trie.insert("ÀPPLE", 3);

        let word = trie.get("apple").expect("apple is stored");
        assert_eq!(word.word, "Apple");
        assert_eq!(word.occurrences, &[1, 2, 3]);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn prefixes_are_not_words() {
        let mut trie = TrieIndex::new();
        trie.insert("carpet", 1);

        assert_eq!(trie.search("car"), None);
        assert_eq!(trie.search("carpets"), None);
        assert_eq!(trie.search("dog"), None);
        assert!(trie.contains("carpet"));
    }

    #[test]
    fn skipped_characters() {
        let mut trie = TrieIndex::new();

        assert!(trie.insert("x1y2", 1));
        assert_eq!(trie.search("xy"), Some(&[1][..]));
        assert_eq!(trie.get("xy").map(|w| w.word), Some("x1y2"));

        // Nothing folds onto the alphabet: the root is never a word
        assert!(!trie.insert("2024", 2));
        assert!(!trie.root().is_end_of_word());
        assert_eq!(trie.search("2024"), None);
        assert_eq!(trie.search(""), None);
    }

    #[test]
    fn hyphen_branch() {
        let mut trie = TrieIndex::new();
        trie.insert("well-known", 3);
        trie.insert("wellknown", 5);

        assert_eq!(trie.search("well-known"), Some(&[3][..]));
        assert_eq!(trie.search("wellknown"), Some(&[5][..]));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn words_in_alphabet_order() {
        let mut trie = TrieIndex::new();
        for (position, word) in ["zebra", "ant", "an", "a-b", "ab"].iter().enumerate() {
            trie.insert(word, u32::try_from(position + 1).expect("position fits"));
        }

        let words: Vec<&str> = trie.words().iter().map(|w| w.word).collect();

        assert_eq!(words, vec!["ab", "an", "ant", "a-b", "zebra"]);
    }

    #[test]
    fn node_labels_keep_raw_characters() {
        let mut trie = TrieIndex::new();
        trie.insert("Él", 1);

        let e = trie.root().child(4).expect("e child");
        assert_eq!(e.label(), Some("É"));
        assert_eq!(trie.num_nodes(), 3);
        assert!(e.child(11).expect("l child").is_leaf());
    }

    #[test]
    fn positions_stay_ascending() {
        let mut trie = TrieIndex::new();
        trie.insert("rust", 9);
        trie.insert("rust", 2);
        trie.insert("rust", 9);

        assert_eq!(trie.search("rust"), Some(&[2, 9][..]));
    }
}
