//! Lexer module for Lox
//!
//! Hand-written scanner that splits Lox source into tokens and collects
//! lexical diagnostics without stopping.

mod scanner;
mod token;

pub use scanner::{Scanned, Scanner, scan};
pub use token::{COMMENT_MARKER, Decimal, Literal, ParseDecimalError, Token, TokenType};
