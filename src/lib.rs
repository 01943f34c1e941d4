//! loxlex - scanner and literal printer for Lox
//!
//! This crate turns Lox source text into a token stream plus lexical
//! diagnostics, and flattens token streams into display text.

pub mod errors;
pub mod lexer;
pub mod render;

// Re-export commonly used types
pub use errors::ScanError;
pub use lexer::{Decimal, Literal, Scanned, Scanner, Token, TokenType, scan};
pub use render::render;
