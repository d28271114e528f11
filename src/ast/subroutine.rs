//! Subroutine declaration structure for the Jack AST.

use crate::token::Span;

use super::stmt::Stmt;
use super::types::{ReturnType, Type};

/// Whether a subroutine is a `constructor`, `function`, or `method`.
///
/// This distinction drives the prologue the code generator emits: a
/// constructor allocates `this` via `Memory.alloc`, a method receives
/// `this` as argument 0, and a function receives neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubroutineKind {
    /// A `constructor`.
    Constructor,
    /// A `function`.
    Function,
    /// A `method`.
    Method,
}

/// A single subroutine parameter: `(type, name)`.
#[derive(Debug, Clone)]
pub struct Param {
    /// The declared parameter type.
    pub ty: Type,
    /// The parameter name.
    pub name: String,
    /// The source location of the parameter's name token.
    pub span: Span,
}

/// A single local variable declaration inside a subroutine body.
///
/// As with [`super::class::ClassVarDec`], `var int i, j;` parses into
/// two `VarDec` nodes sharing `ty` but with distinct `name`/`span`.
#[derive(Debug, Clone)]
pub struct VarDec {
    /// The declared type.
    pub ty: Type,
    /// The declared name.
    pub name: String,
    /// The source location of this declaration's name token.
    pub span: Span,
}

/// A subroutine's body: its local variable declarations followed by its
/// statement list, exactly as the grammar requires (all `var` declarations
/// appear before the first statement).
#[derive(Debug, Clone)]
pub struct SubroutineBody {
    /// Local variable declarations, in source order.
    pub var_decs: Vec<VarDec>,
    /// The statement list, in source order.
    pub statements: Vec<Stmt>,
}

/// A constructor, function, or method declaration.
#[derive(Debug, Clone)]
pub struct SubroutineDec {
    /// Whether this is a constructor, function, or method.
    pub kind: SubroutineKind,
    /// The declared return type, or `void`.
    pub return_type: ReturnType,
    /// The subroutine name.
    pub name: String,
    /// The source location of the subroutine's name token.
    pub name_span: Span,
    /// The parameter list, in source order.
    pub params: Vec<Param>,
    /// The subroutine body.
    pub body: SubroutineBody,
    /// The source location of the whole subroutine declaration.
    pub span: Span,
}
