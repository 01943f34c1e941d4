//! Flat literal printer
//!
//! Maps a token sequence to display text one token at a time. There is no
//! grammar here: parentheses are annotated, not matched.

use crate::lexer::{Token, TokenType};
use std::borrow::Cow;

/// Display text contributed by a single token, if any
pub fn fragment(token: &Token) -> Option<Cow<'_, str>> {
    match token.kind {
        TokenType::True | TokenType::False | TokenType::Nil | TokenType::RightParen => {
            Some(Cow::Borrowed(token.lexeme.as_str()))
        }
        TokenType::Number | TokenType::String => Some(match &token.literal {
            Some(literal) => Cow::Owned(literal.to_string()),
            None => Cow::Borrowed(token.lexeme.as_str()),
        }),
        TokenType::LeftParen => Some(Cow::Owned(format!("{}group ", token.lexeme))),
        _ => None,
    }
}

/// Concatenate the fragments of all tokens, left to right
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().filter_map(fragment).collect()
}
