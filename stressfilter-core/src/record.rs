//! Parsed input records
//!
//! Each non-blank input line carries a word and an integer stress index,
//! separated by whitespace. Parsing keeps the original casing of the word;
//! lowercasing happens inside the rule engine only.

use thiserror::Error;

/// One (word, index) pair read from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// The word with its original casing preserved.
    pub word: String,
    /// Caller-supplied stress position. Any integer is accepted; only
    /// equality with the last-vowel position is ever checked.
    pub index: i64,
}

/// Error type for malformed input lines.
///
/// Both variants carry the offending line verbatim so diagnostics can
/// quote it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not split into exactly two whitespace-separated tokens.
    #[error("malformed line '{line}'")]
    TokenCount { line: String },

    /// The second token is not a valid integer.
    #[error("invalid index in line '{line}'")]
    InvalidIndex { line: String },
}

impl WordRecord {
    /// Parse one trimmed, non-blank input line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[word, index] = tokens.as_slice() else {
            return Err(ParseError::TokenCount {
                line: line.to_string(),
            });
        };

        let index: i64 = index.parse().map_err(|_| ParseError::InvalidIndex {
            line: line.to_string(),
        })?;

        Ok(Self {
            word: word.to_string(),
            index,
        })
    }
}
