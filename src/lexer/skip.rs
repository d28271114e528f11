//! Whitespace skipping for the lexer.

use super::Lexer;

impl Lexer {
    /// Skips consecutive whitespace characters (spaces, tabs, newlines).
    /// Comments have already been turned into whitespace by
    /// [`super::preprocessor::strip_comments`] before the lexer ever sees
    /// the text.
    pub(super) fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }
}
