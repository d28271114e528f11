//! Top-level class structure for the Jack AST.

use crate::token::Span;

use super::subroutine::SubroutineDec;
use super::types::Type;

/// Whether a class-level variable is shared across instances (`static`)
/// or belongs to each instance (`field`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassVarKind {
    /// A `static` variable.
    Static,
    /// A `field` variable.
    Field,
}

/// A single class-level variable declaration.
///
/// `static int x, y;` parses into two `ClassVarDec` nodes sharing the
/// same `kind` and `ty` but distinct `name` and `span`, so that the
/// symbol table gains one row per declared name — matching the data
/// model's "ordered list of declarations, each tagged ... with declared
/// type and name".
#[derive(Debug, Clone)]
pub struct ClassVarDec {
    /// Whether this is `static` or `field`.
    pub kind: ClassVarKind,
    /// The declared type.
    pub ty: Type,
    /// The declared name.
    pub name: String,
    /// The source location of this declaration's name token.
    pub span: Span,
}

/// A Jack class: the unit of compilation.
#[derive(Debug, Clone)]
pub struct Class {
    /// The class name.
    pub name: String,
    /// The source location of the class name token.
    pub name_span: Span,
    /// The class's `static`/`field` variable declarations, in source order.
    pub class_var_decs: Vec<ClassVarDec>,
    /// The class's subroutine declarations, in source order.
    pub subroutine_decs: Vec<SubroutineDec>,
    /// The source location of the whole class declaration.
    pub span: Span,
}
