use crate::{error::Result, occurrences::Position};
use regex::Regex;
use serde::Serialize;

/// ASCII letters and digits, hyphens, and every non-ASCII character.
const WORD_PATTERN: &str = r"[0-9A-Za-z\-\x{80}-\x{10FFFF}]+";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub word: String,
    pub position: Position,
}

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(WORD_PATTERN)?,
        })
    }

    /// Splits `text` into lowercase tokens numbered from 1 in corpus order.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut position: Position = 0;

        self.regex
            .find_iter(text)
            .map(|token| {
                position += 1;
                Token {
                    word: token.as_str().to_lowercase(),
                    position,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word.as_str()).collect()
    }

    #[test]
    fn splits_on_punctuation_and_space() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let tokens = tokenizer.tokenize("The cat, the  MAT!\nwell-known (x2)");

        assert_eq!(
            words(&tokens),
            vec!["the", "cat", "the", "mat", "well-known", "x2"]
        );
        assert_eq!(
            tokens.iter().map(|t| t.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn keeps_multibyte_letters() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let tokens = tokenizer.tokenize("Café com AÇÚCAR; coração.");

        assert_eq!(words(&tokens), vec!["café", "com", "açúcar", "coração"]);
    }

    #[test]
    fn empty_input() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  ,.;!? \n\t").is_empty());
    }

    #[test]
    fn underscore_is_a_boundary() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");

        assert_eq!(words(&tokenizer.tokenize("snake_case")), vec!["snake", "case"]);
    }
}
