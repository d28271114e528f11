//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{ReturnType, Type};
use crate::token::TokenKind;

impl Parser {
    /// Parses `int | char | boolean | className`.
    pub(super) fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.reject_illegal()?;
        let ty = match self.current_kind() {
            TokenKind::Int => Type::Int,
            TokenKind::Char => Type::Char,
            TokenKind::Boolean => Type::Boolean,
            TokenKind::Identifier(name) => Type::ClassName(name.clone()),
            other => {
                return Err(ParseError::syntax(
                    format!("expected a type, found {}", other.describe()),
                    self.current_span(),
                ));
            }
        };
        self.advance();
        Ok(ty)
    }

    /// Parses `void | type`, used for subroutine return types.
    pub(super) fn parse_return_type(&mut self) -> Result<ReturnType, ParseError> {
        if self.check(&TokenKind::Void) {
            self.advance();
            return Ok(ReturnType::Void);
        }
        Ok(ReturnType::Type(self.parse_type()?))
    }
}
