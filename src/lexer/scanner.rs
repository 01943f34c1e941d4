//! Hand-written scanner for Lox
//!
//! Converts source text into tokens plus the diagnostics found on the way.
//! The source is scanned line by line; nothing ever spans a line break.

use super::token::{COMMENT_MARKER, Decimal, Literal, Token, TokenType};
use crate::errors::ScanError;

/// Everything a scan produced
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// Tokens in source order, always ending with a single EOF
    pub tokens: Vec<Token>,
    /// Diagnostics in source order
    pub errors: Vec<ScanError>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Kind of a pending multi-character run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Number,
    Identifier,
}

/// What the scanner is in the middle of at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    /// `start` is the byte offset of the opening quote
    InString { start: usize },
    InNumber { start: usize },
    InIdentifier { start: usize },
}

/// The scanner for Lox source code
pub struct Scanner<'src> {
    /// The source code being scanned
    source: &'src str,
    /// The line being scanned
    line: &'src str,
    /// 1-based number of the current line
    line_no: usize,
    /// Byte position in the current line
    pos: usize,
    state: ScanState,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            line: "",
            line_no: 0,
            pos: 0,
            state: ScanState::Idle,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole source in one pass
    pub fn scan_tokens(mut self) -> Scanned {
        let source = self.source;
        for (idx, line) in source.lines().enumerate() {
            self.line = line;
            self.line_no = idx + 1;
            self.pos = 0;
            self.scan_line();
        }

        self.tokens.push(Token::eof(self.line_no));

        log::debug!(
            "scanned {} lines: {} tokens, {} errors",
            self.line_no,
            self.tokens.len(),
            self.errors.len()
        );

        Scanned {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_line(&mut self) {
        while let Some(c) = self.peek() {
            if !self.step(c) {
                break;
            }
        }
        self.finish_line();
    }

    /// Apply one transition at the cursor.
    ///
    /// Returns `false` when the rest of the line is a comment.
    fn step(&mut self, c: char) -> bool {
        match self.state {
            ScanState::InString { start } => {
                self.advance();
                if c == '"' {
                    let line = self.line;
                    let lexeme = &line[start..self.pos];
                    let value = &line[start + 1..self.pos - 1];
                    self.state = ScanState::Idle;
                    self.add_token(
                        TokenType::String,
                        lexeme,
                        Some(Literal::String(value.to_string())),
                    );
                }
                true
            }
            ScanState::InNumber { start } => {
                if continues_run(RunKind::Number, c, self.peek_next()) {
                    // A point is only taken once
                    if c == '.' && self.line[start..self.pos].contains('.') {
                        self.close_run();
                    } else {
                        self.advance();
                    }
                } else {
                    self.close_run();
                }
                true
            }
            ScanState::InIdentifier { .. } => {
                if continues_run(RunKind::Identifier, c, self.peek_next()) {
                    self.advance();
                } else {
                    self.close_run();
                }
                true
            }
            ScanState::Idle => self.scan_idle(c),
        }
    }

    fn scan_idle(&mut self, c: char) -> bool {
        let line = self.line;
        let start = self.pos;

        if let Some(next) = self.peek_next() {
            let end = start + c.len_utf8() + next.len_utf8();
            let pair = &line[start..end];

            if pair == COMMENT_MARKER {
                return false;
            }
            if let Some(kind) = TokenType::two_char(pair) {
                self.pos = end;
                self.add_token(kind, pair, None);
                return true;
            }
        }

        if c.is_ascii_digit() {
            self.state = ScanState::InNumber { start };
        } else if is_identifier_start(c) {
            self.state = ScanState::InIdentifier { start };
        } else if c == '"' {
            self.state = ScanState::InString { start };
        } else if let Some(kind) = TokenType::single_char(c) {
            self.advance();
            self.add_token(kind, &line[start..self.pos], None);
            return true;
        } else if is_whitespace(c) {
            // skip
        } else {
            let column = self.column();
            self.add_error(ScanError::unexpected_character(c, self.line_no, column));
        }

        self.advance();
        true
    }

    /// Close whatever is still open when the line runs out
    fn finish_line(&mut self) {
        match self.state {
            ScanState::InNumber { .. } | ScanState::InIdentifier { .. } => self.close_run(),
            ScanState::InString { start } => {
                let column = self.line[..start].chars().count() + 1;
                self.add_error(ScanError::unterminated_string(self.line_no, column));
            }
            ScanState::Idle => {}
        }
        self.state = ScanState::Idle;
    }

    /// Emit the pending number or identifier; the cursor is not moved
    fn close_run(&mut self) {
        let line = self.line;
        let lexeme = match self.state {
            ScanState::InNumber { start } | ScanState::InIdentifier { start } => {
                &line[start..self.pos]
            }
            _ => return,
        };

        match self.state {
            ScanState::InNumber { .. } => {
                let value = Decimal::from_digits(lexeme);
                self.add_token(TokenType::Number, lexeme, Some(Literal::Number(value)));
            }
            _ => {
                let kind = TokenType::keyword(lexeme).unwrap_or(TokenType::Identifier);
                self.add_token(kind, lexeme, None);
            }
        }
        self.state = ScanState::Idle;
    }

    /// Peek at the character under the cursor
    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    /// Peek at the character after the cursor
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.line[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// 1-based character column of the cursor
    fn column(&self) -> usize {
        self.line[..self.pos].chars().count() + 1
    }

    fn add_token(&mut self, kind: TokenType, lexeme: &str, literal: Option<Literal>) {
        let token = Token::new(kind, lexeme, literal, self.line_no);
        log::trace!("token: {}", token);
        self.tokens.push(token);
    }

    fn add_error(&mut self, error: ScanError) {
        log::debug!("{}", error);
        self.errors.push(error);
    }
}

/// Scan source text into tokens and diagnostics
pub fn scan(source: &str) -> Scanned {
    Scanner::new(source).scan_tokens()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` extends a run of the given kind.
///
/// Anything else terminates the run: line end, whitespace, a border
/// character, a quote, or (for numbers) a letter or underscore. A number only
/// takes a `.` that has a digit right after it.
fn continues_run(kind: RunKind, c: char, next: Option<char>) -> bool {
    match kind {
        RunKind::Number => {
            c.is_ascii_digit() || (c == '.' && next.is_some_and(|n| n.is_ascii_digit()))
        }
        RunKind::Identifier => c.is_ascii_alphanumeric() || c == '_',
    }
}
