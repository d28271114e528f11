//! Tests for comment handling.

use super::*;

#[test]
fn test_line_comment() {
    let kinds = tokenize_kinds("// comment\n");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_line_comment_at_eof() {
    let kinds = tokenize_kinds("// comment");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_block_comment() {
    let kinds = tokenize_kinds("/* a block comment */ x");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("x".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_doc_comment() {
    let kinds = tokenize_kinds("/** a doc comment\n * spanning lines\n */\nx");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("x".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_then_line_comment_at_eof() {
    let kinds = tokenize_kinds("foo // comment without newline");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("foo".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_comment_between_tokens() {
    let kinds = tokenize_kinds("a /* c */ b");
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
fn test_multiple_comments() {
    let kinds = tokenize_kinds("// first\n// second\nfoo");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("foo".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_line_comment_marker_inside_string_is_preserved() {
    let kinds = tokenize_kinds(r#""has // inside""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringConstant("has // inside".to_string()),
            TokenKind::Eof
        ]
    );
}
