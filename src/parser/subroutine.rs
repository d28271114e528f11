//! Subroutine declaration, parameter, and body parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Param, Stmt, SubroutineBody, SubroutineDec, SubroutineKind, VarDec};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses `("constructor" | "function" | "method") ("void" | type)
    /// subroutineName "(" parameterList ")" subroutineBody`.
    pub(super) fn parse_subroutine_dec(&mut self) -> Result<SubroutineDec, ParseError> {
        let start_span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Constructor => SubroutineKind::Constructor,
            TokenKind::Function => SubroutineKind::Function,
            TokenKind::Method => SubroutineKind::Method,
            other => {
                return Err(ParseError::syntax(
                    format!(
                        "expected 'constructor', 'function', or 'method', found {}",
                        other.describe()
                    ),
                    self.current_span(),
                ));
            }
        };
        self.advance();

        let return_type = self.parse_return_type()?;
        let (name, name_span) = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let params = self.parse_parameter_list()?;
        self.expect(&TokenKind::RightParen)?;

        let body = self.parse_subroutine_body()?;
        let end = body
            .statements
            .last()
            .map(|s| s.span.end)
            .or_else(|| body.var_decs.last().map(|v| v.span.end))
            .unwrap_or(name_span.end);
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);

        Ok(SubroutineDec {
            kind,
            return_type,
            name,
            name_span,
            params,
            body,
            span,
        })
    }

    /// Parses `((type varName) ("," type varName)*)?`.
    fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(&TokenKind::RightParen) {
            return Ok(params);
        }

        loop {
            let ty = self.parse_type()?;
            let (name, span) = self.expect_identifier()?;
            params.push(Param { ty, name, span });

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        Ok(params)
    }

    /// Parses `"{" varDec* statements "}"`.
    fn parse_subroutine_body(&mut self) -> Result<SubroutineBody, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;

        let mut var_decs = Vec::new();
        while self.check(&TokenKind::Var) {
            var_decs.extend(self.parse_var_dec()?);
        }

        let mut statements: Vec<Stmt> = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            statements.push(self.parse_stmt()?);
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(SubroutineBody {
            var_decs,
            statements,
        })
    }

    /// Parses `"var" type varName ("," varName)* ";"`, exploding a
    /// multi-name declaration into one [`VarDec`] per name.
    fn parse_var_dec(&mut self) -> Result<Vec<VarDec>, ParseError> {
        self.expect(&TokenKind::Var)?;
        let ty = self.parse_type()?;

        let mut decs = Vec::new();
        loop {
            let (name, span) = self.expect_identifier()?;
            decs.push(VarDec {
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
