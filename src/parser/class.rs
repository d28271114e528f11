//! Class and class-variable declaration parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Class, ClassVarDec, ClassVarKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses `"class" className "{" classVarDec* subroutineDec* "}"`.
    pub(super) fn parse_class(&mut self) -> Result<Class, ParseError> {
        let start_span = self.expect(&TokenKind::Class)?;
        let (name, name_span) = self.expect_identifier()?;
        self.expect(&TokenKind::LeftBrace)?;

        let mut class_var_decs = Vec::new();
        while matches!(self.current_kind(), TokenKind::Static | TokenKind::Field) {
            class_var_decs.extend(self.parse_class_var_dec()?);
        }

        let mut subroutine_decs = Vec::new();
        while matches!(
            self.current_kind(),
            TokenKind::Constructor | TokenKind::Function | TokenKind::Method
        ) {
            subroutine_decs.push(self.parse_subroutine_dec()?);
        }

        let end_span = self.expect(&TokenKind::RightBrace)?;
        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );

        Ok(Class {
            name,
            name_span,
            class_var_decs,
            subroutine_decs,
            span,
        })
    }

    /// Parses `("static" | "field") type varName ("," varName)* ";"`,
    /// exploding a multi-name declaration into one [`ClassVarDec`] per
    /// name.
    fn parse_class_var_dec(&mut self) -> Result<Vec<ClassVarDec>, ParseError> {
        let kind = match self.current_kind() {
            TokenKind::Static => ClassVarKind::Static,
            TokenKind::Field => ClassVarKind::Field,
            other => {
                return Err(ParseError::syntax(
                    format!("expected 'static' or 'field', found {}", other.describe()),
                    self.current_span(),
                ));
            }
        };
        self.advance();

        let ty = self.parse_type()?;

        let mut decs = Vec::new();
        loop {
            let (name, span) = self.expect_identifier()?;
            decs.push(ClassVarDec {
                kind,
                ty: ty.clone(),
                name,
                span,
            });

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(&TokenKind::Semicolon)?;
        Ok(decs)
    }
}
