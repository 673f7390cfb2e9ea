use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result};

pub fn load_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    debug!("Loaded {} bytes of text from {}", text.len(), path.display());

    Ok(text)
}

/// Splits on commas and newlines, trims, lowercases and drops blank entries.
pub fn parse_keywords(contents: &str) -> Vec<String> {
    contents
        .split([',', '\n'])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Reads a keyword file, rejecting one without a single usable keyword.
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let keywords = parse_keywords(&fs::read_to_string(path)?);
    if keywords.is_empty() {
        return Err(Error::EmptyKeywordList);
    }
    debug!("Loaded {} keywords from {}", keywords.len(), path.display());

    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn splits_commas_and_lines() {
        let keywords = parse_keywords("Apple, banana\r\n  cherry ,\n\n,,Date\n");

        assert_eq!(keywords, vec!["apple", "banana", "cherry", "date"]);
    }

    #[test]
    fn blank_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "  \n , \n\t").expect("Failed to write keywords");

        assert!(matches!(
            load_keywords(file.path()),
            Err(Error::EmptyKeywordList)
        ));
    }

    #[test]
    fn loads_files() {
        let mut text = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(text, "Some text.").expect("Failed to write text");
        let mut keywords = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(keywords, "some,TEXT").expect("Failed to write keywords");

        assert_eq!(
            load_text(text.path()).expect("Failed to load text"),
            "Some text."
        );
        assert_eq!(
            load_keywords(keywords.path()).expect("Failed to load keywords"),
            vec!["some", "text"]
        );
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_text(Path::new("does/not/exist.txt")),
            Err(Error::IO(_))
        ));
    }
}
