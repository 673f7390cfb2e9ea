use serde::Serialize;

use super::table::HashIndex;

/// An occupied slot and how far linear probing pushed it from its home slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSample {
    pub slot: usize,
    pub word: String,
    pub home: usize,
    pub displacement: usize,
    pub occurrences: usize,
}

/// Occupancy and collision figures for a hash index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashStats {
    pub size: usize,
    pub entries: usize,
    pub empty: usize,
    pub load_factor: f64,
    /// `displacements[d]` counts the entries sitting `d` slots past their home slot.
    pub displacements: Vec<usize>,
    pub samples: Vec<SlotSample>,
}

impl HashStats {
    /// Entries that did not land in their home slot.
    pub fn collisions(&self) -> usize {
        self.displacements.iter().skip(1).sum()
    }
}

impl HashIndex {
    /// Collects occupancy statistics, sampling at most `sample_limit` slots.
    pub fn stats(&self, sample_limit: usize) -> HashStats {
        let size = self.size();
        let mut displacements = vec![0; 1];
        let mut samples = Vec::new();

        for (slot, entry) in self.slots().iter().enumerate() {
            let Some(entry) = entry else { continue };

            let home = self.home_slot(entry.word());
            let displacement = if slot >= home {
                slot - home
            } else {
                size + slot - home
            };

            if displacement >= displacements.len() {
                displacements.resize(displacement + 1, 0);
            }
            displacements[displacement] += 1;

            if samples.len() < sample_limit {
                samples.push(SlotSample {
                    slot,
                    word: entry.word().to_string(),
                    home,
                    displacement,
                    occurrences: entry.occurrences().len(),
                });
            }
        }

        HashStats {
            size,
            entries: self.entries(),
            empty: size - self.entries(),
            load_factor: self.load_factor(),
            displacements,
            samples,
        }
    }
}
