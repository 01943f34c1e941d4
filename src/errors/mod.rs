//! Error handling for Lox
//!
//! Lexical diagnostics are plain values: the scanner collects them while it
//! keeps going and hands the whole list back with the tokens.

mod diagnostic;

use thiserror::Error;

pub use diagnostic::{format_error, format_plain, line_col_to_offset, print_error, print_errors};

/// A diagnostic recorded while scanning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A character that starts no token
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        /// 1-based character column of `character`
        column: usize,
    },

    /// A quote opened and the line ended before it was closed
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        line: usize,
        /// 1-based character column of the opening quote
        column: usize,
    },
}

impl ScanError {
    pub fn unexpected_character(character: char, line: usize, column: usize) -> Self {
        ScanError::UnexpectedCharacter {
            character,
            line,
            column,
        }
    }

    pub fn unterminated_string(line: usize, column: usize) -> Self {
        ScanError::UnterminatedString { line, column }
    }

    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { column, .. } => *column,
            ScanError::UnterminatedString { column, .. } => *column,
        }
    }

    /// The message without the `[line N] Error:` prefix
    pub fn message(&self) -> String {
        match self {
            ScanError::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character: {}", character)
            }
            ScanError::UnterminatedString { .. } => "Unterminated string.".to_string(),
        }
    }
}
