//! Parse error types.

use crate::lexer::LexError;
use crate::token::Span;

/// An error that occurred during parsing.
///
/// Most parse errors are plain syntax errors (an unexpected token where
/// the grammar required something else), but a parser also surfaces the
/// two lexical problems the lexer defers to it: an out-of-range integer
/// constant and an illegal byte reaching the token stream as
/// [`crate::token::TokenKind::Illegal`].
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - The lexical error kind wrapped here
#[derive(Debug)]
pub enum ParseError {
    /// A lexical problem recognized while consuming a token (integer
    /// overflow, an illegal byte).
    Lex(LexError),
    /// An ordinary grammar violation.
    Syntax {
        /// A human-readable description of the error.
        message: String,
        /// The source location where the error occurred.
        span: Span,
    },
}

impl ParseError {
    /// Builds a plain syntax error at the given span.
    pub(super) fn syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::Syntax {
            message: message.into(),
            span,
        }
    }

    /// The source location of this error, for diagnostic rendering.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span,
            ParseError::Syntax { span, .. } => *span,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{e}"),
            ParseError::Syntax { message, span } => {
                write!(f, "{}:{}: {}", span.line, span.column, message)
            }
        }
    }
}

impl std::error::Error for ParseError {}
