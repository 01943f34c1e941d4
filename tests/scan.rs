use loxlex::{Decimal, Literal, ScanError, Token, TokenType, render, scan};

fn number(lexeme: &str, value: &str, line: usize) -> Token {
    let value: Decimal = value.parse().unwrap();
    Token::new(TokenType::Number, lexeme, Some(Literal::Number(value)), line)
}

fn string(text: &str, line: usize) -> Token {
    Token::new(
        TokenType::String,
        format!("\"{}\"", text),
        Some(Literal::String(text.to_string())),
        line,
    )
}

fn plain(kind: TokenType, lexeme: &str, line: usize) -> Token {
    Token::new(kind, lexeme, None, line)
}

#[test]
fn test_every_scan_ends_with_one_eof() {
    let sources = ["", "\n", "(", "\"open", "@@@", "var x = 1;\nprint x;", "// only"];
    for source in sources {
        let tokens = scan(source).tokens;
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenType::Eof));
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenType::Eof).count(),
            1,
            "source {source:?}"
        );
    }
}

#[test]
fn test_unknown_characters_across_lines() {
    let scanned = scan("({}%+;\n-/@");

    assert_eq!(
        scanned.errors,
        vec![
            ScanError::unexpected_character('%', 1, 4),
            ScanError::unexpected_character('@', 2, 3),
        ]
    );
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 1),
            plain(TokenType::LeftBrace, "{", 1),
            plain(TokenType::RightBrace, "}", 1),
            plain(TokenType::Plus, "+", 1),
            plain(TokenType::Semicolon, ";", 1),
            plain(TokenType::Minus, "-", 2),
            plain(TokenType::Slash, "/", 2),
            Token::eof(2),
        ]
    );
}

#[test]
fn test_two_char_tokens_win_over_prefixes() {
    let scanned = scan("(>=!=!");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 1),
            plain(TokenType::GreaterEqual, ">=", 1),
            plain(TokenType::BangEqual, "!=", 1),
            plain(TokenType::Bang, "!", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_comments() {
    let scanned = scan("()// Comment");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 1),
            plain(TokenType::RightParen, ")", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_division_before_comment() {
    let scanned = scan("/()// Comment");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::Slash, "/", 1),
            plain(TokenType::LeftParen, "(", 1),
            plain(TokenType::RightParen, ")", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_whitespace_and_newlines() {
    let scanned = scan("(\t\n )");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 1),
            plain(TokenType::RightParen, ")", 2),
            Token::eof(2),
        ]
    );
}

#[test]
fn test_string_literal() {
    let scanned = scan("\"foo baz\"");
    assert!(scanned.errors.is_empty());
    assert_eq!(scanned.tokens, vec![string("foo baz", 1), Token::eof(1)]);
}

#[test]
fn test_string_with_comment_marker() {
    let scanned = scan("\"foo \tbar 123 // hello world!\"");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![string("foo \tbar 123 // hello world!", 1), Token::eof(1)]
    );
}

#[test]
fn test_unterminated_string() {
    let scanned = scan("\"bar");
    assert_eq!(scanned.tokens, vec![Token::eof(1)]);
    assert_eq!(scanned.errors, vec![ScanError::unterminated_string(1, 1)]);
}

#[test]
fn test_unterminated_string_does_not_stop_later_lines() {
    let scanned = scan("\"bar\n(\"ok\")");
    assert_eq!(scanned.errors, vec![ScanError::unterminated_string(1, 1)]);
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 2),
            string("ok", 2),
            plain(TokenType::RightParen, ")", 2),
            Token::eof(2),
        ]
    );
}

#[test]
fn test_number_literal() {
    let scanned = scan("42");
    assert!(scanned.errors.is_empty());
    assert_eq!(scanned.tokens, vec![number("42", "42.0", 1), Token::eof(1)]);
    assert_eq!(scanned.tokens[0].to_string(), "NUMBER 42 42.0");
}

#[test]
fn test_number_forms() {
    let scanned = scan("1\n2345.6789\n42.0000");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            number("1", "1.0", 1),
            number("2345.6789", "2345.6789", 2),
            number("42.0000", "42.0", 3),
            Token::eof(3),
        ]
    );
    let printed: Vec<String> = scanned.tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        printed,
        vec![
            "NUMBER 1 1.0",
            "NUMBER 2345.6789 2345.6789",
            "NUMBER 42.0000 42.0",
            "EOF  null",
        ]
    );
}

#[test]
fn test_math_sentence() {
    let scanned = scan("(29+78) > 69 != (\"Success\" != \"Failure\") != (15.5 >= 52)");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::LeftParen, "(", 1),
            number("29", "29.0", 1),
            plain(TokenType::Plus, "+", 1),
            number("78", "78.0", 1),
            plain(TokenType::RightParen, ")", 1),
            plain(TokenType::Greater, ">", 1),
            number("69", "69.0", 1),
            plain(TokenType::BangEqual, "!=", 1),
            plain(TokenType::LeftParen, "(", 1),
            string("Success", 1),
            plain(TokenType::BangEqual, "!=", 1),
            string("Failure", 1),
            plain(TokenType::RightParen, ")", 1),
            plain(TokenType::BangEqual, "!=", 1),
            plain(TokenType::LeftParen, "(", 1),
            number("15.5", "15.5", 1),
            plain(TokenType::GreaterEqual, ">=", 1),
            number("52", "52.0", 1),
            plain(TokenType::RightParen, ")", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_identifiers() {
    let scanned = scan("_1236ar 6az baz foo7 bar");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::Identifier, "_1236ar", 1),
            number("6", "6.0", 1),
            plain(TokenType::Identifier, "az", 1),
            plain(TokenType::Identifier, "baz", 1),
            plain(TokenType::Identifier, "foo7", 1),
            plain(TokenType::Identifier, "bar", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_reserved_words() {
    let scanned = scan("var foo if bar else 0");
    assert!(scanned.errors.is_empty());
    assert_eq!(
        scanned.tokens,
        vec![
            plain(TokenType::Var, "var", 1),
            plain(TokenType::Identifier, "foo", 1),
            plain(TokenType::If, "if", 1),
            plain(TokenType::Identifier, "bar", 1),
            plain(TokenType::Else, "else", 1),
            number("0", "0", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_valid_tokens_around_unknown_character() {
    let scanned = scan("1 $ \"a\" # and");
    assert_eq!(
        scanned.errors,
        vec![
            ScanError::unexpected_character('$', 1, 3),
            ScanError::unexpected_character('#', 1, 9),
        ]
    );
    assert_eq!(
        scanned.tokens,
        vec![
            number("1", "1", 1),
            string("a", 1),
            plain(TokenType::And, "and", 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_code_sample() {
    let source = r#"var result = (a + b) > 7 or "Success" != "Failure" or x >= 5
        while (result) {
            var counter = 0
            counter = counter + 1
            if (counter == 10) {
                return nil
            }
        }"#;
    let expected = "VAR var null
IDENTIFIER result null
EQUAL = null
LEFT_PAREN ( null
IDENTIFIER a null
PLUS + null
IDENTIFIER b null
RIGHT_PAREN ) null
GREATER > null
NUMBER 7 7.0
OR or null
STRING \"Success\" Success
BANG_EQUAL != null
STRING \"Failure\" Failure
OR or null
IDENTIFIER x null
GREATER_EQUAL >= null
NUMBER 5 5.0
WHILE while null
LEFT_PAREN ( null
IDENTIFIER result null
RIGHT_PAREN ) null
LEFT_BRACE { null
VAR var null
IDENTIFIER counter null
EQUAL = null
NUMBER 0 0.0
IDENTIFIER counter null
EQUAL = null
IDENTIFIER counter null
PLUS + null
NUMBER 1 1.0
IF if null
LEFT_PAREN ( null
IDENTIFIER counter null
EQUAL_EQUAL == null
NUMBER 10 10.0
RIGHT_PAREN ) null
LEFT_BRACE { null
RETURN return null
NIL nil null
RIGHT_BRACE } null
RIGHT_BRACE } null
EOF  null";

    let scanned = scan(source);
    assert!(scanned.errors.is_empty());

    let printed: Vec<String> = scanned.tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(printed, expected.lines().collect::<Vec<_>>());
    assert_eq!(scanned.tokens.last(), Some(&Token::eof(8)));
}

#[test]
fn test_render_scanned_literals() {
    let scanned = scan("(\"bar\")\ntrue 42 nil // done");
    assert!(scanned.errors.is_empty());
    assert_eq!(render(&scanned.tokens), "(group bar)true42.0nil");
}
