use std::collections::{HashMap, HashSet};

use crate::{
    error::{Error, Result},
    occurrences::Position,
    tokenizer::Tokenizer,
};

/// A distinct corpus word together with every position it occurs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub word: String,
    pub positions: Vec<Position>,
}

impl CorpusEntry {
    pub const fn new(word: String, positions: Vec<Position>) -> Self {
        Self { word, positions }
    }
}

/// Tokenized text grouped by word, the input both engines are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    num_tokens: usize,
}

impl Corpus {
    /// Tokenizes `text` and groups the tokens by their lowercase word.
    ///
    /// Entries appear in order of first occurrence; each position list is ascending.
    pub fn from_text(text: &str) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        let tokens = tokenizer.tokenize(text);

        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<CorpusEntry> = Vec::new();

        for token in &tokens {
            match slots.get(&token.word) {
                Some(&slot) => entries[slot].positions.push(token.position),
                None => {
                    slots.insert(token.word.clone(), entries.len());
                    entries.push(CorpusEntry::new(token.word.clone(), vec![token.position]));
                }
            }
        }

        Ok(Self {
            entries,
            num_tokens: tokens.len(),
        })
    }

    /// Builds a corpus from the parallel `words` / `positions` arrays.
    ///
    /// Words must already be grouped: the same word twice, in any case, is rejected.
    pub fn from_parallel(words: Vec<String>, positions: Vec<Vec<Position>>) -> Result<Self> {
        if words.len() != positions.len() {
            return Err(Error::CorpusMismatch {
                words: words.len(),
                positions: positions.len(),
            });
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(words.len());
        if let Some(word) = words.iter().find(|w| !seen.insert(w.to_ascii_lowercase())) {
            return Err(Error::DuplicateCorpusWord { word: word.clone() });
        }

        let entries: Vec<CorpusEntry> = words
            .into_iter()
            .zip(positions)
            .map(|(word, positions)| CorpusEntry::new(word, positions))
            .collect();
        let num_tokens = entries.iter().map(|e| e.positions.len()).sum();

        Ok(Self {
            entries,
            num_tokens,
        })
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [CorpusEntry] {
        &mut self.entries
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens the corpus was built from.
    pub const fn num_tokens(&self) -> usize {
        self.num_tokens
    }
}
