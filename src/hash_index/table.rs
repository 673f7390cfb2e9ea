use log::{debug, warn};

use crate::{
    config::IndexConfig,
    error::{Error, Result},
    occurrences::{OccurrenceList, Position},
};

use super::iterators::Iter;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the ASCII-lowercased bytes of `word`.
pub fn fnv1a(word: &str) -> u32 {
    word.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte.to_ascii_lowercase())).wrapping_mul(FNV_PRIME)
    })
}

fn home_slot(word: &str, size: usize) -> usize {
    fnv1a(word) as usize % size
}

fn allocate_slots<T>(size: usize) -> Result<Vec<Option<T>>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(size)
        .map_err(|_| Error::AllocationFailure { requested: size })?;
    slots.resize_with(size, || None);

    Ok(slots)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry {
    word: String,
    occurrences: OccurrenceList,
}

impl HashEntry {
    const fn new(word: String, occurrences: OccurrenceList) -> Self {
        Self { word, occurrences }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn occurrences(&self) -> &[Position] {
        self.occurrences.as_slice()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

#[derive(Debug, Clone, Copy)]
enum Probe {
    Found(usize),
    Vacant(usize),
    Exhausted,
}

#[derive(Debug)]
pub struct HashIndex {
    slots: Vec<Option<HashEntry>>,
    entries: usize,
    max_load_factor: f64,
    occurrence_capacity: usize,
}

impl HashIndex {
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(size, &IndexConfig::default())
    }

    pub fn with_config(size: usize, config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        if size == 0 {
            return Err(Error::InvalidCapacity(size));
        }

        Ok(Self {
            slots: allocate_slots(size)?,
            entries: 0,
            max_load_factor: config.max_load_factor,
            occurrence_capacity: config.occurrence_capacity,
        })
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub const fn entries(&self) -> usize {
        self.entries
    }

    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.size() as f64
    }

    /// Slot `word` would occupy in the absence of collisions.
    pub fn home_slot(&self, word: &str) -> usize {
        home_slot(word, self.size())
    }

    #[allow(clippy::cast_precision_loss)]
    fn over_threshold(&self) -> bool {
        self.entries as f64 > self.size() as f64 * self.max_load_factor
    }

    fn probe(&self, word: &str) -> Probe {
        let size = self.size();
        let start = home_slot(word, size);
        let mut index = start;

        loop {
            match &self.slots[index] {
                None => return Probe::Vacant(index),
                Some(entry) if entry.word.eq_ignore_ascii_case(word) => {
                    return Probe::Found(index)
                }
                Some(_) => {}
            }

            index = (index + 1) % size;
            if index == start {
                return Probe::Exhausted;
            }
        }
    }

    /// Rehashes every entry into a table of `size * 2 + 1` slots.
    ///
    /// On failure the live table is left exactly as it was.
    pub fn resize(&mut self) -> Result<()> {
        let old_size = self.size();
        let failure = || Error::ResizeFailure {
            from: old_size,
            to: old_size.saturating_mul(2).saturating_add(1),
        };

        let new_size = old_size
            .checked_mul(2)
            .and_then(|size| size.checked_add(1))
            .ok_or_else(failure)?;

        let mut new_slots = allocate_slots::<HashEntry>(new_size).map_err(|_| failure())?;
        let mut occupied = allocate_slots::<()>(new_size).map_err(|_| failure())?;

        // Plan every move before touching the live table
        let mut moves = Vec::with_capacity(self.entries);
        for (from, slot) in self.slots.iter().enumerate() {
            let Some(entry) = slot else { continue };

            let start = home_slot(&entry.word, new_size);
            let mut to = start;
            while occupied[to].is_some() {
                to = (to + 1) % new_size;
                if to == start {
                    return Err(failure());
                }
            }

            occupied[to] = Some(());
            moves.push((from, to));
        }

        for (from, to) in moves {
            new_slots[to] = self.slots[from].take();
        }
        self.slots = new_slots;

        debug!(
            "Resized hash table from {old_size} to {new_size} slots ({} entries)",
            self.entries
        );

        Ok(())
    }

    fn claim(&mut self, word: &str) -> Result<&mut HashEntry> {
        if self.over_threshold() {
            if let Err(e) = self.resize() {
                warn!("Skipping '{word}': {e}");
                return Err(e);
            }
        }

        match self.probe(word) {
            Probe::Found(index) => self.slots[index]
                .as_mut()
                .ok_or_else(|| Error::Generic(format!("Slot {index} emptied during probe"))),
            Probe::Vacant(index) => {
                self.entries += 1;
                let occurrences = OccurrenceList::with_capacity(self.occurrence_capacity);
                Ok(self.slots[index].insert(HashEntry::new(word.to_string(), occurrences)))
            }
            Probe::Exhausted => {
                warn!("Skipping '{word}': hash table full at {} slots", self.size());
                Err(Error::TableFull {
                    word: word.to_string(),
                })
            }
        }
    }

    /// Makes sure `word` has an entry, without recording a position.
    pub fn insert_word(&mut self, word: &str) -> Result<()> {
        self.claim(word).map(|_| ())
    }

    /// Records that `word` occurs at `position`.
    ///
    /// Inserting a position the word already has is a no-op.
    pub fn insert(&mut self, word: &str, position: Position) -> Result<InsertOutcome> {
        let entry = self.claim(word)?;

        if entry.occurrences.insert(position) {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::Duplicate)
        }
    }

    pub fn get(&self, word: &str) -> Option<&HashEntry> {
        match self.probe(word) {
            Probe::Found(index) => self.slots[index].as_ref(),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Occurrence list of `word`, matched ASCII case-insensitively.
    pub fn search(&self, word: &str) -> Option<&[Position]> {
        self.get(word).map(HashEntry::occurrences)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.slots)
    }

    pub(crate) fn slots(&self) -> &[Option<HashEntry>] {
        &self.slots
    }
}
