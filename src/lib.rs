//! Keyword-occurrence indexes over a text, built with either an
//! open-addressing hash table or a character trie.

pub mod config;
pub mod corpus;
pub mod error;
pub mod hash_index;
pub mod index_builder;
pub mod loader;
pub mod occurrences;
pub mod report;
pub mod tokenizer;
pub mod trie_index;

pub use config::IndexConfig;
pub use corpus::{Corpus, CorpusEntry};
pub use error::{Error, Result};
pub use index_builder::{EngineKind, HashKeywordIndex, IndexedWord, KeywordIndex, TrieKeywordIndex};
pub use occurrences::{OccurrenceList, Position};
