//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::lexer::LexError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Returns `true` if the current token matches `kind`.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// If the current token is an illegal byte, turns it into the
    /// `LexError` the lexer deferred rather than letting the parser
    /// stumble over it as a confusing syntax error.
    pub(super) fn reject_illegal(&self) -> Result<(), ParseError> {
        if let TokenKind::Illegal(c) = self.current_kind() {
            return Err(LexError::illegal_character(*c, self.current_span()).into());
        }
        Ok(())
    }

    /// Expects the current token to match `expected` and advances.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<Span, ParseError> {
        self.reject_illegal()?;
        if self.current_kind() == expected {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::syntax(
                format!(
                    "expected {}, found {}",
                    expected.describe(),
                    self.current_kind().describe()
                ),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name and span.
    pub(super) fn expect_identifier(&mut self) -> Result<(String, Span), ParseError> {
        self.reject_illegal()?;
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            let span = self.current_span();
            self.advance();
            Ok((name, span))
        } else {
            Err(ParseError::syntax(
                format!("expected identifier, found {}", self.current_kind().describe()),
                self.current_span(),
            ))
        }
    }
}
