//! Token definitions for Lox
//!
//! Defines all token types produced by the scanner, the literal values they
//! carry and the lookup tables the scanner dispatches on.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker that starts a line comment
pub const COMMENT_MARKER: &str = "//";

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenType,
    /// Exact source text the token was matched from
    pub lexeme: String,
    /// Decoded value, only present for NUMBER and STRING
    pub literal: Option<Literal>,
    /// 1-based line where the token started
    pub line: usize,
}

impl Token {
    pub fn new(
        kind: TokenType,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// The end-of-input sentinel
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::Eof, "", None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

/// Value carried by a literal token
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Decimal),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// Error returned when text is not a plain decimal numeral
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal literal: {text:?}")]
pub struct ParseDecimalError {
    pub text: String,
}

/// Exact decimal number kept as normalised digit text.
///
/// The integer part has no leading zeros and the fractional part no trailing
/// zeros; both keep at least one digit. Two values are equal when they denote
/// the same number, so `42` equals `42.0000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    integer: String,
    fraction: String,
}

impl Decimal {
    /// Build from scanner-validated text (`digits` or `digits.digits`)
    pub(crate) fn from_digits(text: &str) -> Self {
        let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));

        let integer = integer.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');

        Self {
            integer: if integer.is_empty() { "0" } else { integer }.to_string(),
            fraction: if fraction.is_empty() { "0" } else { fraction }.to_string(),
        }
    }

    /// Digits before the decimal point
    pub fn integer_part(&self) -> &str {
        &self.integer
    }

    /// Digits after the decimal point
    pub fn fractional_part(&self) -> &str {
        &self.fraction
    }

    pub fn is_integer(&self) -> bool {
        self.fraction == "0"
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

        let valid = match s.split_once('.') {
            Some((integer, fraction)) => all_digits(integer) && all_digits(fraction),
            None => all_digits(s),
        };

        if valid {
            Ok(Self::from_digits(s))
        } else {
            Err(ParseDecimalError {
                text: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.fraction)
    }
}

/// The kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Look up a one-character operator or punctuation symbol
    pub fn single_char(c: char) -> Option<TokenType> {
        match c {
            '(' => Some(TokenType::LeftParen),
            ')' => Some(TokenType::RightParen),
            '{' => Some(TokenType::LeftBrace),
            '}' => Some(TokenType::RightBrace),
            ',' => Some(TokenType::Comma),
            '.' => Some(TokenType::Dot),
            '-' => Some(TokenType::Minus),
            '+' => Some(TokenType::Plus),
            ';' => Some(TokenType::Semicolon),
            '/' => Some(TokenType::Slash),
            '*' => Some(TokenType::Star),
            '!' => Some(TokenType::Bang),
            '=' => Some(TokenType::Equal),
            '>' => Some(TokenType::Greater),
            '<' => Some(TokenType::Less),
            _ => None,
        }
    }

    /// Look up a two-character operator
    pub fn two_char(text: &str) -> Option<TokenType> {
        match text {
            "!=" => Some(TokenType::BangEqual),
            "==" => Some(TokenType::EqualEqual),
            ">=" => Some(TokenType::GreaterEqual),
            "<=" => Some(TokenType::LessEqual),
            _ => None,
        }
    }

    /// Look up a reserved word (case sensitive)
    pub fn keyword(text: &str) -> Option<TokenType> {
        match text {
            "and" => Some(TokenType::And),
            "class" => Some(TokenType::Class),
            "else" => Some(TokenType::Else),
            "false" => Some(TokenType::False),
            "for" => Some(TokenType::For),
            "fun" => Some(TokenType::Fun),
            "if" => Some(TokenType::If),
            "nil" => Some(TokenType::Nil),
            "or" => Some(TokenType::Or),
            "print" => Some(TokenType::Print),
            "return" => Some(TokenType::Return),
            "super" => Some(TokenType::Super),
            "this" => Some(TokenType::This),
            "true" => Some(TokenType::True),
            "var" => Some(TokenType::Var),
            "while" => Some(TokenType::While),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::And
                | TokenType::Class
                | TokenType::Else
                | TokenType::False
                | TokenType::Fun
                | TokenType::For
                | TokenType::If
                | TokenType::Nil
                | TokenType::Or
                | TokenType::Print
                | TokenType::Return
                | TokenType::Super
                | TokenType::This
                | TokenType::True
                | TokenType::Var
                | TokenType::While
        )
    }

    /// Name used when printing tokens
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::For => "FOR",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
