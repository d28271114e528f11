//! Cursor/token-navigation edge cases for the parser's helper methods.

use super::*;
use crate::lexer::Lexer;
use crate::token::TokenKind;

fn tokens_for(src: &str) -> Vec<crate::token::Token> {
    Lexer::new(src).tokenize().expect("lexing should succeed")
}

#[test]
fn test_current_at_start() {
    let parser = Parser::new(tokens_for("class"));
    assert_eq!(*parser.current_kind(), TokenKind::Class);
}

#[test]
fn test_advance_moves_forward() {
    let mut parser = Parser::new(tokens_for("class Main"));
    assert_eq!(*parser.current_kind(), TokenKind::Class);
    parser.advance();
    assert!(matches!(parser.current_kind(), TokenKind::Identifier(_)));
}

#[test]
fn test_advance_stops_at_eof() {
    let mut parser = Parser::new(tokens_for("class"));
    parser.advance();
    assert!(parser.is_eof());
    // advancing past Eof must not panic or move further.
    parser.advance();
    parser.advance();
    assert!(parser.is_eof());
}

#[test]
fn test_check_does_not_consume() {
    let parser = Parser::new(tokens_for("class"));
    assert!(parser.check(&TokenKind::Class));
    assert!(parser.check(&TokenKind::Class), "check must not advance");
}

#[test]
fn test_expect_identifier_returns_name_and_span() {
    let mut parser = Parser::new(tokens_for("foo"));
    let (name, span) = parser.expect_identifier().unwrap();
    assert_eq!(name, "foo");
    assert_eq!(span.start, 0);
    assert_eq!(span.end, 3);
}

#[test]
fn test_expect_identifier_rejects_keyword() {
    let mut parser = Parser::new(tokens_for("class"));
    assert!(parser.expect_identifier().is_err());
}

#[test]
fn test_expect_mismatched_token_errors() {
    let mut parser = Parser::new(tokens_for("class"));
    assert!(parser.expect(&TokenKind::LeftBrace).is_err());
}

#[test]
fn test_reject_illegal_passes_through_valid_tokens() {
    let parser = Parser::new(tokens_for("class"));
    assert!(parser.reject_illegal().is_ok());
}

#[test]
fn test_reject_illegal_surfaces_illegal_byte() {
    let parser = Parser::new(tokens_for("@"));
    assert!(parser.reject_illegal().is_err());
}

#[test]
fn test_parse_with_trailing_newline() {
    let class = parse_ok("class Main { function void main() { return; } }\n");
    assert_eq!(class.name, "Main");
}

#[test]
fn test_parse_with_multiple_trailing_newlines() {
    let class = parse_ok("class Main { function void main() { return; } }\n\n\n");
    assert_eq!(class.name, "Main");
}

#[test]
fn test_parse_with_leading_and_trailing_whitespace() {
    let class = parse_ok("  \n  class Main { function void main() { return; } }  \n  ");
    assert_eq!(class.name, "Main");
}

#[test]
#[should_panic(expected = "token list must not be empty")]
fn test_parser_new_panics_on_empty_tokens() {
    Parser::new(Vec::new());
}
