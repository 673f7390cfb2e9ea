use log::{debug, info};

use crate::{
    config::IndexConfig,
    corpus::Corpus,
    error::Result,
    hash_index::HashIndex,
    occurrences::Position,
};

use super::{sort_words, usable_keywords, BuildSummary, EngineKind, IndexedWord, KeywordIndex};

/// Keyword index backed by an open-addressing [`HashIndex`].
///
/// Corpus words are filtered through a temporary hash set of the keywords.
#[derive(Debug, Default)]
pub struct HashKeywordIndex {
    config: IndexConfig,
    table: Option<HashIndex>,
}

impl HashKeywordIndex {
    pub const fn new(config: IndexConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    pub const fn table(&self) -> Option<&HashIndex> {
        self.table.as_ref()
    }

    fn keyword_set(&self, keywords: &[String]) -> Result<HashIndex> {
        let mut keyword_set = HashIndex::with_config((keywords.len() * 2).max(1), &self.config)?;
        for keyword in usable_keywords(keywords) {
            keyword_set.insert_word(keyword)?;
        }

        Ok(keyword_set)
    }
}

impl KeywordIndex for HashKeywordIndex {
    fn kind(&self) -> EngineKind {
        EngineKind::Hash
    }

    fn build(&mut self, corpus: &mut Corpus, keywords: &[String]) -> Result<BuildSummary> {
        self.destroy();

        let size = (keywords.len() * 2).max(self.config.initial_hash_size);
        let mut table = HashIndex::with_config(size, &self.config)?;
        let keyword_set = self.keyword_set(keywords)?;

        debug!(
            "Filtering {} corpus words against {} keywords",
            corpus.len(),
            keyword_set.entries()
        );

        let mut positions = 0;
        for entry in corpus.entries() {
            if entry.word.is_empty() || !keyword_set.contains(&entry.word) {
                continue;
            }

            for &position in &entry.positions {
                table.insert(&entry.word, position)?;
            }
            positions += entry.positions.len();
        }

        let summary = BuildSummary {
            keywords: keyword_set.entries(),
            words: table.entries(),
            positions,
        };
        info!(
            "Built hash index: {} of {} keywords found, {} slots",
            summary.words,
            summary.keywords,
            table.size()
        );

        self.table = Some(table);

        Ok(summary)
    }

    fn query(&self, word: &str) -> Option<&[Position]> {
        self.table.as_ref()?.search(word)
    }

    fn enumerate(&self) -> Vec<IndexedWord> {
        let Some(table) = &self.table else {
            return Vec::new();
        };

        let mut words: Vec<IndexedWord> = table
            .iter()
            .map(|entry| IndexedWord::new(entry.word(), entry.occurrences()))
            .collect();
        sort_words(&mut words);

        words
    }

    fn destroy(&mut self) {
        self.table = None;
    }

    fn is_built(&self) -> bool {
        self.table.is_some()
    }
}
