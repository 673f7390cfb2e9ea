//! Keyword-filtered index construction over either engine.

mod hash;
mod trie;

use std::{cmp::Ordering, fmt::Display};

use serde::Serialize;

use crate::{corpus::Corpus, error::Result, occurrences::Position};

pub use hash::HashKeywordIndex;
pub use trie::TrieKeywordIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Hash,
    Trie,
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hash => write!(f, "hash"),
            Self::Trie => write!(f, "trie"),
        }
    }
}

/// A word held by an index with its ascending positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedWord {
    pub word: String,
    pub positions: Vec<Position>,
}

impl IndexedWord {
    pub fn new(word: &str, positions: &[Position]) -> Self {
        Self {
            word: word.to_string(),
            positions: positions.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BuildSummary {
    /// Non-empty keywords supplied.
    pub keywords: usize,
    /// Distinct words stored in the index.
    pub words: usize,
    /// Positions stored across all words.
    pub positions: usize,
}

/// Common contract of the hash and trie keyword indexes.
///
/// Every build starts from scratch: whatever a previous build stored is
/// released first.
pub trait KeywordIndex {
    fn kind(&self) -> EngineKind;

    /// Fills the index with the corpus words matching `keywords`.
    ///
    /// Implementations may reorder `corpus` entries.
    fn build(&mut self, corpus: &mut Corpus, keywords: &[String]) -> Result<BuildSummary>;

    /// Positions of `word`, or `None` when it is not indexed.
    fn query(&self, word: &str) -> Option<&[Position]>;

    /// Every indexed word, sorted case-insensitively.
    fn enumerate(&self) -> Vec<IndexedWord>;

    /// Releases the index. Safe to call when nothing was built.
    fn destroy(&mut self);

    fn is_built(&self) -> bool;
}

/// Orders strings the way `strcasecmp` does: byte-wise after ASCII lowercasing.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

fn sort_words(words: &mut [IndexedWord]) {
    words.sort_by(|a, b| cmp_ignore_ascii_case(&a.word, &b.word));
}

fn usable_keywords(keywords: &[String]) -> impl Iterator<Item = &str> {
    keywords.iter().map(String::as_str).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_ordering() {
        assert_eq!(cmp_ignore_ascii_case("Apple", "apple"), Ordering::Equal);
        assert_eq!(cmp_ignore_ascii_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_ascii_case("cat", "CA"), Ordering::Greater);
    }

    #[test]
    fn both_engines_agree() {
        let keywords = vec!["the".to_string(), "dog".to_string()];
        let mut engines: Vec<Box<dyn KeywordIndex>> = vec![
            Box::new(HashKeywordIndex::default()),
            Box::new(TrieKeywordIndex::default()),
        ];

        for engine in &mut engines {
            let mut corpus =
                Corpus::from_text("the cat sat on the mat").expect("Failed to build corpus");
            engine
                .build(&mut corpus, &keywords)
                .expect("Failed to build index");

            assert_eq!(
                engine.enumerate(),
                vec![IndexedWord::new("the", &[1, 5])],
                "{} index",
                engine.kind()
            );
            assert_eq!(engine.query("the"), Some(&[1, 5][..]));
            assert_eq!(engine.query("dog"), None);
        }
    }
}
