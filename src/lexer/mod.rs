//! Lexical analyzer for the Jack programming language.
//!
//! This module provides the [`Lexer`] struct which converts Jack source
//! code text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer:
//! - Strips comments ahead of tokenizing (see [`preprocessor`])
//! - Scans the input character by character
//! - Recognizes identifiers/keywords, integer and string constants, and
//!   punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace runs between tokens
//!
//! # Supported tokens
//!
//! - **Keywords**: `class constructor function method field static var
//!   int char boolean void true false null this let do if else while
//!   return`
//! - **Identifiers**: a letter or underscore followed by letters, digits,
//!   or underscores
//! - **Integer constants**: runs of ASCII digits; the lexer does not
//!   bound-check the value — that happens when the parser builds an
//!   `IntegerConstant` expression node
//! - **String constants**: text between `"` and the next `"`; embedded
//!   newlines are rejected, escape sequences are not recognized
//! - **Punctuation**: `{ } ( ) [ ] . , ; + - * / & | < > = ~`
//!
//! The lexer is total: any byte that starts no valid token becomes an
//! [`crate::token::TokenKind::Illegal`] token rather than an error, so the
//! parser is the single place that turns a malformed program into a
//! structured diagnostic.
//!
//! # Examples
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::token::TokenKind;
//!
//! let tokens = Lexer::new("let x = 1;").tokenize().unwrap();
//! assert!(matches!(tokens[0].kind, TokenKind::Let));
//! assert!(matches!(tokens[1].kind, TokenKind::Identifier(_)));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`preprocessor`] - Comment stripping ahead of tokenization
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
pub mod preprocessor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Jack source code.
///
/// The `Lexer` owns a comment-stripped copy of its input (see
/// [`preprocessor::strip_comments`]) and tracks its position within it,
/// including line/column numbers for error reporting. It is designed to
/// be used once per source file.
pub struct Lexer {
    /// The comment-stripped source being tokenized.
    pub(super) input: String,
    /// Current byte position in `input`.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl Lexer {
    /// Creates a new `Lexer` for the given input string, stripping
    /// comments first.
    pub fn new(input: &str) -> Self {
        Lexer {
            input: preprocessor::strip_comments(input),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// The returned vector always ends with a [`TokenKind::Eof`] token.
    /// Illegal bytes do not abort tokenization; they are returned as
    /// [`TokenKind::Illegal`] tokens for the parser to reject.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] only for an unterminated or newline-
    /// containing string literal — every other malformed input is
    /// surfaced as a token, never an error, at this stage.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            let token = self.next_token()?;
            tokens.push(token);
        }

        Ok(tokens)
    }
}
