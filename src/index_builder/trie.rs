use std::collections::HashSet;

use log::{debug, info};

use crate::{
    config::IndexConfig,
    corpus::Corpus,
    error::Result,
    occurrences::Position,
    trie_index::TrieIndex,
};

use super::{
    cmp_ignore_ascii_case, sort_words, usable_keywords, BuildSummary, EngineKind, IndexedWord,
    KeywordIndex,
};

/// Keyword index backed by a [`TrieIndex`].
///
/// The corpus is sorted case-insensitively and each keyword is located with a
/// binary search. Words are stored under the keyword's own spelling.
#[derive(Debug, Default)]
pub struct TrieKeywordIndex {
    config: IndexConfig,
    trie: Option<TrieIndex>,
}

impl TrieKeywordIndex {
    pub const fn new(config: IndexConfig) -> Self {
        Self { config, trie: None }
    }

    pub const fn trie(&self) -> Option<&TrieIndex> {
        self.trie.as_ref()
    }
}

impl KeywordIndex for TrieKeywordIndex {
    fn kind(&self) -> EngineKind {
        EngineKind::Trie
    }

    /// Sorts `corpus` entries case-insensitively as a side effect.
    fn build(&mut self, corpus: &mut Corpus, keywords: &[String]) -> Result<BuildSummary> {
        self.destroy();
        self.config.validate()?;

        let mut trie = TrieIndex::with_config(&self.config);
        let entries = corpus.entries_mut();
        entries.sort_by(|a, b| cmp_ignore_ascii_case(&a.word, &b.word));

        debug!("Sorted {} corpus words for keyword lookup", entries.len());

        let mut seen: HashSet<String> = HashSet::new();
        let mut summary = BuildSummary::default();

        for keyword in usable_keywords(keywords) {
            if !seen.insert(keyword.to_ascii_lowercase()) {
                continue;
            }
            summary.keywords += 1;

            let Ok(found) =
                entries.binary_search_by(|entry| cmp_ignore_ascii_case(&entry.word, keyword))
            else {
                continue;
            };

            for &position in &entries[found].positions {
                if trie.insert(keyword, position) {
                    summary.positions += 1;
                }
            }
        }

        summary.words = trie.len();
        info!(
            "Built trie index: {} of {} keywords found, {} nodes",
            summary.words,
            summary.keywords,
            trie.num_nodes()
        );

        self.trie = Some(trie);

        Ok(summary)
    }

    fn query(&self, word: &str) -> Option<&[Position]> {
        self.trie.as_ref()?.search(word)
    }

    fn enumerate(&self) -> Vec<IndexedWord> {
        let Some(trie) = &self.trie else {
            return Vec::new();
        };

        let mut words: Vec<IndexedWord> = trie
            .words()
            .into_iter()
            .map(|word| IndexedWord::new(word.word, word.occurrences))
            .collect();
        sort_words(&mut words);

        words
    }

    fn destroy(&mut self) {
        self.trie = None;
    }

    fn is_built(&self) -> bool {
        self.trie.is_some()
    }
}
