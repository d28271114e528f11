//! Statement nodes for the Jack AST.

use crate::token::Span;

use super::expr::{Expr, SubroutineCall};

/// The kind of a statement in the Jack language.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// `let name = expr;` or `let name[index] = expr;`.
    Let {
        /// The assignment target's name.
        name: String,
        /// The array index expression, present only for an array store.
        index: Option<Expr>,
        /// The right-hand-side expression.
        value: Expr,
    },

    /// `if (condition) { then_branch } (else { else_branch })?`.
    If {
        /// The condition expression.
        condition: Expr,
        /// Statements executed when the condition is true.
        then_branch: Vec<Stmt>,
        /// Statements executed when the condition is false, if any.
        else_branch: Option<Vec<Stmt>>,
    },

    /// `while (condition) { body }`.
    While {
        /// The loop condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body: Vec<Stmt>,
    },

    /// `do call;` — a subroutine call whose return value is discarded.
    Do(SubroutineCall),

    /// `return expr?;`.
    Return(Option<Expr>),
}

/// A statement in the Jack language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
