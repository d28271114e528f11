//! Tests for edge cases and platform compatibility.

use super::*;

#[test]
fn test_windows_line_endings_treated_as_whitespace() {
    let kinds = tokenize_kinds("a\r\nb");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("a".to_string()),
            TokenKind::Identifier("b".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_integer_literal_leading_zeros_preserved_as_lexeme() {
    let kinds = tokenize_kinds("007");
    assert_eq!(
        kinds,
        vec![
            TokenKind::IntegerConstant("007".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_integer_literal_all_zeros() {
    let kinds = tokenize_kinds("000");
    assert_eq!(
        kinds,
        vec![
            TokenKind::IntegerConstant("000".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_illegal_byte_is_a_token_not_an_error() {
    let kinds = tokenize_kinds("@");
    assert_eq!(kinds, vec![TokenKind::Illegal('@'), TokenKind::Eof]);
}

#[test]
fn test_illegal_byte_does_not_abort_tokenization() {
    let kinds = tokenize_kinds("x @ y");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::Illegal('@'),
            TokenKind::Identifier("y".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_empty_string_constant() {
    let kinds = tokenize_kinds(r#""""#);
    assert_eq!(
        kinds,
        vec![TokenKind::StringConstant(String::new()), TokenKind::Eof]
    );
}
