//! Abstract Syntax Tree definitions for the Jack programming language.
//!
//! This module defines the data structures produced by [`crate::parser`]
//! and consumed by [`crate::codegen`]. Every node is a tagged variant
//! (a discriminated union) rather than part of a subclass hierarchy, so
//! code generation can dispatch on the tag and the compiler can check
//! dispatch exhaustiveness.
//!
//! # Structure
//!
//! - [`Class`] - The root node: a class name, its variable declarations,
//!   and its subroutine declarations
//! - [`SubroutineDec`] - A constructor, function, or method
//! - [`Stmt`] - One of `let`, `if`, `while`, `do`, `return`
//! - [`Expr`] - Constants, identifiers, prefix/infix operators, and calls
//! - [`Type`] / [`ReturnType`] - Declared types
//!
//! Every node carries a [`Span`](crate::token::Span) for diagnostics.
//!
//! # Module Structure
//!
//! - [`types`] - `int`/`char`/`boolean`/class-name types
//! - [`class`] - Class and class-variable declarations
//! - [`subroutine`] - Subroutine declarations, parameters, and bodies
//! - [`stmt`] - Statement nodes and kinds
//! - [`expr`] - Expression nodes and kinds
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates VM text from the AST

mod class;
mod expr;
mod stmt;
mod subroutine;
mod types;


pub use class::{Class, ClassVarDec, ClassVarKind};
pub use expr::{Expr, ExprKind, InfixOp, KeywordConstant, PrefixOp, SubroutineCall};
pub use stmt::{Stmt, StmtKind};
pub use subroutine::{Param, SubroutineBody, SubroutineDec, SubroutineKind, VarDec};
pub use types::{ReturnType, Type};
