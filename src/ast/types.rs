//! Type annotations for variable, parameter, and field declarations.

use std::fmt;

/// A declared type in Jack source code.
///
/// Jack has three primitives plus arbitrary class names used as object
/// types. The symbol table and code generator never inspect `ty` beyond
/// storing and displaying it — spec.md's code generation is untyped at
/// the VM level, so this enum exists for the parser and for diagnostics,
/// not for any type-checking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// The `int` primitive.
    Int,
    /// The `char` primitive.
    Char,
    /// The `boolean` primitive.
    Boolean,
    /// A class name used as an object type (e.g. `Point`, `Array`).
    ClassName(String),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Char => write!(f, "char"),
            Type::Boolean => write!(f, "boolean"),
            Type::ClassName(name) => write!(f, "{name}"),
        }
    }
}

/// The return type of a subroutine: either `void` or a [`Type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// The `void` keyword.
    Void,
    /// A subroutine that returns a value of this type.
    Type(Type),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Void => write!(f, "void"),
            ReturnType::Type(ty) => write!(f, "{ty}"),
        }
    }
}
