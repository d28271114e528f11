//! Two-scope symbol table used by code generation.
//!
//! Jack has exactly two binding scopes: the class scope (`static` and
//! `field` variables, alive for the whole class) and the subroutine scope
//! (`argument` and `local` variables, reset at the start of every
//! constructor/function/method). Each kind keeps its own zero-based index,
//! assigned in declaration order, which is exactly the index the VM's
//! segment access instructions expect.
//!
//! A name declared in the subroutine scope shadows a class-scope name of
//! the same spelling: looking a name up checks the subroutine table first.
//!
//! # Examples
//!
//! ```
//! use jackc::ast::Type;
//! use jackc::symbol_table::{Kind, SymbolTable};
//!
//! let mut table = SymbolTable::new();
//! table.define("size", Type::Int, Kind::Field);
//! table.start_subroutine();
//! table.define("x", Type::Int, Kind::Argument);
//!
//! assert_eq!(table.kind_of("x"), Some(Kind::Argument));
//! assert_eq!(table.index_of("size"), Some(0));
//! assert_eq!(table.count(Kind::Field), 1);
//! ```

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::ast::Type;

/// The binding kind of a declared name, matching the four Jack variable
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A class-level `static` variable.
    Static,
    /// A class-level `field` variable.
    Field,
    /// A subroutine parameter.
    Argument,
    /// A subroutine-local `var` variable.
    Local,
}

impl Kind {
    /// The VM memory segment a name of this kind is accessed through.
    ///
    /// `Field` maps to the `this` segment rather than `field`: fields live
    /// in the object record pointed to by `this`, not a segment of their
    /// own.
    pub fn segment(self) -> &'static str {
        match self {
            Kind::Static => "static",
            Kind::Field => "this",
            Kind::Argument => "argument",
            Kind::Local => "local",
        }
    }
}

struct Entry {
    ty: Type,
    kind: Kind,
    index: usize,
}

/// Tracks declared names and their type/kind/index across a class and its
/// current subroutine.
#[derive(Default)]
pub struct SymbolTable {
    class_scope: HashMap<String, Entry>,
    subroutine_scope: HashMap<String, Entry>,
    static_count: usize,
    field_count: usize,
    argument_count: usize,
    local_count: usize,
}

impl SymbolTable {
    /// Creates an empty table with no class or subroutine bindings.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Clears the subroutine scope and its `argument`/`local` counters,
    /// ready for the next subroutine in the class. Class-scope bindings
    /// and their counters are untouched.
    pub fn start_subroutine(&mut self) {
        self.subroutine_scope.clear();
        self.argument_count = 0;
        self.local_count = 0;
    }

    /// Records a new binding, assigning it the next index for its kind.
    ///
    /// Redeclaring a name within the same scope overwrites the previous
    /// entry; the parser is expected to reject duplicate declarations
    /// before this would matter.
    pub fn define(&mut self, name: impl Into<String>, ty: Type, kind: Kind) {
        let name = name.into();
        let index = match kind {
            Kind::Static => {
                let i = self.static_count;
                self.static_count += 1;
                i
            }
            Kind::Field => {
                let i = self.field_count;
                self.field_count += 1;
                i
            }
            Kind::Argument => {
                let i = self.argument_count;
                self.argument_count += 1;
                i
            }
            Kind::Local => {
                let i = self.local_count;
                self.local_count += 1;
                i
            }
        };

        let entry = Entry { ty, kind, index };
        match kind {
            Kind::Static | Kind::Field => {
                self.class_scope.insert(name, entry);
            }
            Kind::Argument | Kind::Local => {
                self.subroutine_scope.insert(name, entry);
            }
        }
    }

    /// The number of names defined so far for the given kind.
    pub fn count(&self, kind: Kind) -> usize {
        match kind {
            Kind::Static => self.static_count,
            Kind::Field => self.field_count,
            Kind::Argument => self.argument_count,
            Kind::Local => self.local_count,
        }
    }

    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.subroutine_scope
            .get(name)
            .or_else(|| self.class_scope.get(name))
    }

    /// The kind a name was declared with, or `None` if it is unknown in
    /// either scope.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.lookup(name).map(|e| e.kind)
    }

    /// The declared type of a name, or `None` if it is unknown in either
    /// scope.
    pub fn type_of(&self, name: &str) -> Option<&Type> {
        self.lookup(name).map(|e| &e.ty)
    }

    /// The zero-based segment index of a name, or `None` if it is unknown
    /// in either scope.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup(name).map(|e| e.index)
    }
}
