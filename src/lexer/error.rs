//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    pub(super) fn unterminated_string(span: Span) -> Self {
        LexError {
            message: "unterminated string literal".to_string(),
            span,
        }
    }

    pub(super) fn newline_in_string(span: Span) -> Self {
        LexError {
            message: "string literal may not contain a newline".to_string(),
            span,
        }
    }

    /// Constructed by the parser when an integer constant's lexeme does
    /// not fit the target word size; lexing itself never rejects a run of
    /// digits.
    pub(crate) fn integer_overflow(lexeme: &str, span: Span) -> Self {
        LexError {
            message: format!("integer literal '{lexeme}' does not fit the target word size"),
            span,
        }
    }

    /// Constructed by the parser when it encounters a [`crate::token::TokenKind::Illegal`]
    /// token; the lexer itself never fails on an unrecognized byte.
    pub(crate) fn illegal_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("illegal character {c:?}"),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
