//! Expression parsing.
//!
//! Jack gives every binary operator the same precedence and strict
//! left-to-right associativity, so expression parsing is a flat loop
//! rather than a precedence-climbing (Pratt) scheme: `a - b - c` parses
//! as `(a - b) - c` simply because the loop folds left to right, with no
//! precedence comparison needed.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, InfixOp, KeywordConstant, PrefixOp, SubroutineCall};
use crate::lexer::LexError;
use crate::token::{Span, TokenKind};

fn infix_op(kind: &TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Add),
        TokenKind::Minus => Some(InfixOp::Sub),
        TokenKind::Star => Some(InfixOp::Mul),
        TokenKind::Slash => Some(InfixOp::Div),
        TokenKind::Ampersand => Some(InfixOp::And),
        TokenKind::Pipe => Some(InfixOp::Or),
        TokenKind::LessThan => Some(InfixOp::Lt),
        TokenKind::GreaterThan => Some(InfixOp::Gt),
        TokenKind::Equals => Some(InfixOp::Eq),
        _ => None,
    }
}

impl Parser {
    /// Parses `term (op term)*`.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = infix_op(self.current_kind()) {
            self.advance();
            let right = self.parse_term()?;
            let span = Span::new(
                left.span.start,
                right.span.end,
                left.span.line,
                left.span.column,
            );
            left = Expr::new(
                ExprKind::Infix {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parses a single term.
    ///
    /// # Grammar
    ///
    /// ```text
    /// term → integerConstant | stringConstant | keywordConstant
    ///      | varName | varName "[" expression "]" | subroutineCall
    ///      | "(" expression ")" | unaryOp term
    /// ```
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.reject_illegal()?;
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::IntegerConstant(lexeme) => {
                let lexeme = lexeme.clone();
                self.advance();
                let value: i32 = lexeme
                    .parse()
                    .map_err(|_| LexError::integer_overflow(&lexeme, start_span))?;
                if value > i16::MAX as i32 {
                    return Err(LexError::integer_overflow(&lexeme, start_span).into());
                }
                Ok(Expr::new(ExprKind::IntegerConstant(value), start_span))
            }
            TokenKind::StringConstant(value) => {
                let value = value.clone();
                self.advance();
                Ok(Expr::new(ExprKind::StringConstant(value), start_span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::KeywordConstant(KeywordConstant::True),
                    start_span,
                ))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::KeywordConstant(KeywordConstant::False),
                    start_span,
                ))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::KeywordConstant(KeywordConstant::Null),
                    start_span,
                ))
            }
            TokenKind::This => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::KeywordConstant(KeywordConstant::This),
                    start_span,
                ))
            }
            TokenKind::Minus => {
                self.advance();
                let operand = self.parse_term()?;
                let span = Span::new(
                    start_span.start,
                    operand.span.end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(
                    ExprKind::Prefix {
                        op: PrefixOp::Neg,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::Tilde => {
                self.advance();
                let operand = self.parse_term()?;
                let span = Span::new(
                    start_span.start,
                    operand.span.end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(
                    ExprKind::Prefix {
                        op: PrefixOp::Not,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let end_span = self.expect(&TokenKind::RightParen)?;
                let span = Span::new(
                    start_span.start,
                    end_span.end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(inner.kind, span))
            }
            TokenKind::Identifier(_) => self.parse_identifier_term(start_span),
            other => Err(ParseError::syntax(
                format!("expected an expression, found {}", other.describe()),
                start_span,
            )),
        }
    }

    /// Parses the identifier-led terms: a plain reference, an array
    /// access, or a subroutine call.
    fn parse_identifier_term(&mut self, start_span: Span) -> Result<Expr, ParseError> {
        if matches!(
            self.tokens.get(self.pos + 1).map(|t| &t.kind),
            Some(TokenKind::LeftParen) | Some(TokenKind::Dot)
        ) {
            let call = self.parse_subroutine_call()?;
            let end = call
                .args
                .last()
                .map(|a| a.span.end)
                .unwrap_or(start_span.end);
            let span = Span::new(start_span.start, end, start_span.line, start_span.column);
            return Ok(Expr::new(ExprKind::SubroutineCall(call), span));
        }

        let (name, _) = self.expect_identifier()?;

        if self.check(&TokenKind::LeftBracket) {
            self.advance();
            let index = self.parse_expr()?;
            let end_span = self.expect(&TokenKind::RightBracket)?;
            let span = Span::new(
                start_span.start,
                end_span.end,
                start_span.line,
                start_span.column,
            );
            return Ok(Expr::new(
                ExprKind::Identifier {
                    name,
                    index: Some(Box::new(index)),
                },
                span,
            ));
        }

        Ok(Expr::new(
            ExprKind::Identifier { name, index: None },
            start_span,
        ))
    }

    /// Parses `subroutineName "(" expressionList ")"` or
    /// `(className | varName) "." subroutineName "(" expressionList ")"`.
    pub(super) fn parse_subroutine_call(&mut self) -> Result<SubroutineCall, ParseError> {
        let (first, _) = self.expect_identifier()?;

        let (receiver, name) = if self.check(&TokenKind::Dot) {
            self.advance();
            let (method, _) = self.expect_identifier()?;
            (Some(first), method)
        } else {
            (None, first)
        };

        self.expect(&TokenKind::LeftParen)?;
        let args = self.parse_expression_list()?;
        self.expect(&TokenKind::RightParen)?;

        Ok(SubroutineCall {
            receiver,
            name,
            args,
        })
    }

    /// Parses `(expression ("," expression)*)?`.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(&TokenKind::RightParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expr()?);
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        Ok(args)
    }
}
