//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading various token types from the
//! input: identifiers/keywords, integer and string constants, and
//! punctuation.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl Lexer {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// Assumes whitespace has already been skipped. Never fails except
    /// for a malformed string literal — an unrecognized byte becomes a
    /// [`TokenKind::Illegal`] token rather than an error.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let c = self
            .current_char()
            .expect("next_token called at end of input");

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if let Some(kind) = Self::punctuation_kind(c) {
            return Ok(self.single_char_token(kind, start_pos, start_line, start_column));
        }

        if c == '"' {
            return self.read_string(start_pos, start_line, start_column);
        }

        if c.is_ascii_digit() {
            return Ok(self.read_integer(start_pos, start_line, start_column));
        }

        if c.is_alphabetic() || c == '_' {
            return Ok(self.read_identifier_or_keyword(start_pos, start_line, start_column));
        }

        let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line, self.column);
        self.advance();
        Ok(Token::new(TokenKind::Illegal(c), span))
    }

    /// Maps a single punctuation character to its token kind. Jack has no
    /// multi-character operators, so this is a flat, lookahead-free
    /// mapping.
    fn punctuation_kind(c: char) -> Option<TokenKind> {
        Some(match c {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '&' => TokenKind::Ampersand,
            '|' => TokenKind::Pipe,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '=' => TokenKind::Equals,
            '~' => TokenKind::Tilde,
            _ => return None,
        })
    }

    /// Reads a string constant. The opening `"` must be at the current
    /// position. Extends to the next `"`, exclusive; an embedded newline
    /// or running off the end of input is an error.
    fn read_string(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        self.advance(); // skip opening quote
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Ok(Token::new(TokenKind::StringConstant(value), span));
                }
                Some('\n') => {
                    return Err(LexError::newline_in_string(Span::new(
                        start_pos, self.pos, start_line, start_column,
                    )));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(LexError::unterminated_string(Span::new(
                        start_pos, self.pos, start_line, start_column,
                    )));
                }
            }
        }
    }

    /// Reads a run of ASCII digits as an integer constant. The lexeme
    /// text is kept verbatim; range-checking it against the target word
    /// size is the parser's job.
    fn read_integer(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let lexeme = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::IntegerConstant(lexeme), span)
    }

    /// Reads an identifier, applying the keyword lookup table before
    /// finalizing the token.
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let kind = TokenKind::keyword_for(&lexeme).unwrap_or(TokenKind::Identifier(lexeme));
        Token::new(kind, span)
    }
}
