use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::hash_index::HashStats;

/// Occupancy, collision analysis and a slot sample of a hash index.
pub struct HashStructure<'a>(pub &'a HashStats);

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl Display for HashStructure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let stats = self.0;

        writeln!(f, "=== Hash Table Structure (size: {}) ===", stats.size)?;
        writeln!(f, "Root [{} entries]", stats.entries)?;
        writeln!(
            f,
            "├── Filled slots: {} ({:.1}%)",
            stats.entries,
            percent(stats.entries, stats.size)
        )?;
        writeln!(
            f,
            "└── Empty slots: {} ({:.1}%)",
            stats.empty,
            percent(stats.empty, stats.size)
        )?;

        writeln!(f)?;
        writeln!(f, "=== Collision Analysis ===")?;
        let home = stats.displacements.first().copied().unwrap_or_default();
        writeln!(
            f,
            "Home slot: {home} words ({:.1}%)",
            percent(home, stats.entries)
        )?;
        for (displacement, &count) in stats.displacements.iter().enumerate().skip(1) {
            if count > 0 {
                writeln!(
                    f,
                    "Displacement {displacement}: {count} words ({:.1}%)",
                    percent(count, stats.entries)
                )?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total collisions: {} ({:.1}% of entries)",
            stats.collisions(),
            percent(stats.collisions(), stats.entries)
        )?;
        writeln!(f, "Load factor: {:.2}", stats.load_factor)?;

        writeln!(f)?;
        writeln!(f, "=== Hash Table Sample ===")?;
        if stats.samples.is_empty() {
            writeln!(f, "No entries in the hash table.")?;
        }
        for sample in &stats.samples {
            writeln!(
                f,
                "[{}] -> {} (home: {}, displacement: {}, occurrences: {})",
                sample.slot, sample.word, sample.home, sample.displacement, sample.occurrences
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::hash_index::HashIndex;

    use super::*;

    #[test]
    fn empty_table() {
        let table = HashIndex::new(5).expect("Failed to create table");
        let rendered = HashStructure(&table.stats(20)).to_string();

        assert!(rendered.contains("=== Hash Table Structure (size: 5) ==="));
        assert!(rendered.contains("└── Empty slots: 5 (100.0%)"));
        assert!(rendered.contains("Home slot: 0 words (0.0%)"));
        assert!(rendered.contains("Load factor: 0.00"));
        assert!(rendered.contains("No entries in the hash table."));
    }

    #[test]
    fn lists_samples() {
        let mut table = HashIndex::new(11).expect("Failed to create table");
        table.insert("word", 3).expect("Failed to insert");
        table.insert("word", 8).expect("Failed to insert");

        let slot = table.home_slot("word");
        let rendered = HashStructure(&table.stats(20)).to_string();

        assert!(rendered.contains("├── Filled slots: 1 (9.1%)"));
        assert!(rendered.contains("Home slot: 1 words (100.0%)"));
        assert!(rendered.contains(&format!(
            "[{slot}] -> word (home: {slot}, displacement: 0, occurrences: 2)"
        )));
        assert!(rendered.contains("Total collisions: 0 (0.0% of entries)"));
    }
}
