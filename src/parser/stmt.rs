//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → letStatement | ifStatement | whileStatement
    ///           | doStatement | returnStatement
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.reject_illegal()?;
        match self.current_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Do => self.parse_do_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            other => Err(ParseError::syntax(
                format!("expected a statement, found {}", other.describe()),
                self.current_span(),
            )),
        }
    }

    /// Parses `"let" varName ("[" expression "]")? "=" expression ";"`.
    fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.expect(&TokenKind::Let)?;
        let (name, _) = self.expect_identifier()?;

        let index = if self.check(&TokenKind::LeftBracket) {
            self.advance();
            let expr = self.parse_expr()?;
            self.expect(&TokenKind::RightBracket)?;
            Some(expr)
        } else {
            None
        };

        self.expect(&TokenKind::Equals)?;
        let value = self.parse_expr()?;
        let end_span = self.expect(&TokenKind::Semicolon)?;

        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(
            StmtKind::Let { name, index, value },
            span,
        ))
    }

    /// Parses `"if" "(" expression ")" "{" statements "}"
    /// ("else" "{" statements "}")?`.
    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let then_branch = self.parse_block()?;

        let (else_branch, end) = if self.check(&TokenKind::Else) {
            self.advance();
            let block = self.parse_block()?;
            let end = block
                .last()
                .map(|s| s.span.end)
                .unwrap_or(then_branch.last().map(|s| s.span.end).unwrap_or(start_span.end));
            (Some(block), end)
        } else {
            let end = then_branch
                .last()
                .map(|s| s.span.end)
                .unwrap_or(start_span.end);
            (None, end)
        };

        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parses `"while" "(" expression ")" "{" statements "}"`.
    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let body = self.parse_block()?;

        let end = body.last().map(|s| s.span.end).unwrap_or(start_span.end);
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// Parses `"do" subroutineCall ";"`.
    fn parse_do_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.expect(&TokenKind::Do)?;
        let call = self.parse_subroutine_call()?;
        let end_span = self.expect(&TokenKind::Semicolon)?;

        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Do(call), span))
    }

    /// Parses `"return" expression? ";"`.
    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.expect(&TokenKind::Return)?;

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let end_span = self.expect(&TokenKind::Semicolon)?;

        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses `"{" statement* "}"`.
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(stmts)
    }
}
