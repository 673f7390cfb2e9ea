use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const INITIAL_HASH_SIZE: usize = 1023;
pub const MAX_LOAD_FACTOR: f64 = 0.7;
pub const OCCURRENCE_CAPACITY: usize = 10;

/// Tuning knobs shared by both engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Lower bound for the capacity of a freshly built hash index.
    pub initial_hash_size: usize,
    /// A hash table is resized before an insertion when `entries > size * max_load_factor`.
    pub max_load_factor: f64,
    /// Starting capacity of every occurrence list.
    pub occurrence_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            initial_hash_size: INITIAL_HASH_SIZE,
            max_load_factor: MAX_LOAD_FACTOR,
            occurrence_capacity: OCCURRENCE_CAPACITY,
        }
    }
}

impl IndexConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_hash_size == 0 {
            return Err(Error::InvalidConfig(
                "initial_hash_size must be positive".to_string(),
            ));
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "max_load_factor must be in (0, 1], got {}",
                self.max_load_factor
            )));
        }

        if self.occurrence_capacity == 0 {
            return Err(Error::InvalidConfig(
                "occurrence_capacity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = IndexConfig::default();

        assert_eq!(config.initial_hash_size, 1023);
        assert!((config.max_load_factor - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.occurrence_capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"initial_hash_size": 31}}"#).expect("Failed to write config");

        let config = IndexConfig::from_path(file.path()).expect("Failed to load config");

        assert_eq!(config.initial_hash_size, 31);
        assert_eq!(config.occurrence_capacity, 10);
    }

    #[test]
    fn rejects_bad_load_factor() {
        let config = IndexConfig {
            max_load_factor: 1.5,
            ..IndexConfig::default()
        };

        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_sizes() {
        let config = IndexConfig {
            initial_hash_size: 0,
            ..IndexConfig::default()
        };
        assert!(config.validate().is_err());

        let config = IndexConfig {
            occurrence_capacity: 0,
            ..IndexConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
