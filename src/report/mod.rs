//! Human-readable and JSON views over built indexes.

mod structure;
mod tree;

use std::{collections::HashSet, fmt::Display};

use serde::Serialize;

use crate::{
    index_builder::{EngineKind, IndexedWord, KeywordIndex},
    occurrences::Position,
};

pub use structure::HashStructure;
pub use tree::{HashTree, TrieTree};

/// Number of occupied slots listed by [`HashStructure`].
pub const SAMPLE_SLOTS: usize = 20;

/// Comma-separated positions, e.g. `1, 5`.
pub fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Alphabetical listing of an index plus the keywords it does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub engine: EngineKind,
    pub entries: Vec<IndexedWord>,
    pub missing: Vec<String>,
}

impl IndexReport {
    /// Returns `None` when `index` has not been built.
    pub fn new(index: &dyn KeywordIndex, keywords: &[String]) -> Option<Self> {
        if !index.is_built() {
            return None;
        }

        let mut reported = HashSet::new();
        let missing = keywords
            .iter()
            .filter(|keyword| !keyword.is_empty() && index.query(keyword).is_none())
            .filter(|keyword| reported.insert(keyword.to_ascii_lowercase()))
            .cloned()
            .collect();

        Some(Self {
            engine: index.kind(),
            entries: index.enumerate(),
            missing,
        })
    }
}

impl Display for IndexReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self.engine {
            EngineKind::Hash => "Hash Index",
            EngineKind::Trie => "Trie Index",
        };
        writeln!(f, "=== {title} ===")?;

        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.word, format_positions(&entry.positions))?;
        }

        for keyword in &self.missing {
            writeln!(f, "{keyword}: not found in text.")?;
        }

        Ok(())
    }
}
