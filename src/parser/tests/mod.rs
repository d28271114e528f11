//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`class`]: Class and class-variable declaration parsing
//! - [`stmt`]: Statement parsing (let, if, while, do, return)
//! - [`expr`]: Expression parsing (precedence, calls, array access)
//! - [`errors`]: Error detection and message quality
//! - [`helpers`]: Cursor/token-navigation edge cases

use super::*;
use crate::ast::{Class, Expr, Stmt, StmtKind};
use crate::lexer::Lexer;

mod class;
mod helpers;

/// Parses `input` and returns the resulting `Class`, or panics with the
/// error if parsing failed.
pub(super) fn parse_ok(input: &str) -> Class {
    let tokens = Lexer::new(input)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse input {:?}: {}", input, e))
}

/// Parses `input`, expecting it to fail, and returns the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    let tokens = Lexer::new(input)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    match Parser::new(tokens).parse() {
        Ok(class) => panic!(
            "Expected parsing to fail for input {:?}, but it succeeded with class {:?}",
            input, class.name
        ),
        Err(e) => e,
    }
}

/// Parses a single expression wrapped in a minimal class/subroutine/
/// `return` shell, and returns the expression fed to `return`.
pub(super) fn parse_expr(expr_src: &str) -> Expr {
    let input = format!("class Test {{ function void test() {{ return {expr_src}; }} }}");
    let class = parse_ok(&input);
    let sub = &class.subroutine_decs[0];
    match &sub.body.statements[0].kind {
        StmtKind::Return(Some(expr)) => expr.clone(),
        other => panic!("expected a Return statement wrapping the expression, got {other:?}"),
    }
}

/// Parses a single statement inside a minimal subroutine body and
/// returns it.
pub(super) fn parse_stmt(stmt_src: &str) -> Stmt {
    let input = format!("class Test {{ function void test() {{ {stmt_src} }} }}");
    let class = parse_ok(&input);
    let sub = &class.subroutine_decs[0];
    assert_eq!(
        sub.body.statements.len(),
        1,
        "expected exactly one statement from {:?}, got {}",
        stmt_src,
        sub.body.statements.len()
    );
    sub.body.statements[0].clone()
}
