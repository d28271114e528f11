//! VM code generation for the Jack programming language.
//!
//! This module provides the [`Codegen`] struct which walks a parsed
//! [`Class`] and emits stack-machine VM text: one `function`/`push`/
//! `pop`/... instruction per line, via the [`crate::vm::Writer`] it
//! owns.
//!
//! # Overview
//!
//! Code generation:
//!
//! - Registers every class-level `static`/`field` declaration in a
//!   [`crate::symbol_table::SymbolTable`] (no code is emitted for them)
//! - For each subroutine, resets the subroutine scope, defines `this`
//!   (for methods), parameters, and locals, then emits the
//!   constructor/method prologue before the body
//! - Lowers every statement and expression to the VM instruction
//!   sequences spec.md §4.5 specifies, choosing the right memory segment
//!   for every identifier via the symbol table
//! - Synthesizes unique branch labels for `if`/`while` using two
//!   counters that increase monotonically across the whole class —
//!   never reset between subroutines — so no two labels collide
//!
//! # Example
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//! use jackc::codegen::Codegen;
//!
//! let source = "class Main { function void main() { return; } }";
//! let tokens = Lexer::new(source).tokenize().unwrap();
//! let class = Parser::new(tokens).parse().unwrap();
//! let vm_text = Codegen::new().compile(&class).unwrap();
//! assert_eq!(vm_text, "function Main.main 0\npush constant 0\nreturn\n");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `stmt` - Statement code generation
//! - `expr` - Expression code generation
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [`crate::symbol_table`] - Scoped variable resolution
//! * [`crate::vm`] - The instruction text writer this module drives

mod error;
mod expr;
mod stmt;


pub use error::CodegenError;

use crate::ast::{Class, SubroutineDec, SubroutineKind, Type};
use crate::symbol_table::{Kind, SymbolTable};
use crate::vm::{self, Writer};

/// Maps a symbol table storage [`Kind`] to the VM [`vm::Segment`] it is
/// accessed through. `Kind::Field` maps to `this`: fields live in the
/// object record `this` points to, not a segment of their own.
fn segment_for(kind: Kind) -> vm::Segment {
    match kind {
        Kind::Static => vm::Segment::Static,
        Kind::Field => vm::Segment::This,
        Kind::Argument => vm::Segment::Argument,
        Kind::Local => vm::Segment::Local,
    }
}

/// Walks a [`Class`] and emits VM text.
///
/// One instance compiles exactly one class. Label counters
/// (`while_counter`, `if_counter`) live on this struct rather than on AST
/// nodes, are incremented before the generator recurses into a loop or
/// branch body, and are never reset between subroutines — only between
/// classes, implicitly, by constructing a new `Codegen`.
pub struct Codegen {
    symbol_table: SymbolTable,
    writer: Writer,
    class_name: String,
    while_counter: u32,
    if_counter: u32,
}

impl Default for Codegen {
    fn default() -> Self {
        Codegen::new()
    }
}

impl Codegen {
    /// Creates a code generator with an empty symbol table and writer.
    pub fn new() -> Self {
        Codegen {
            symbol_table: SymbolTable::new(),
            writer: Writer::new(),
            class_name: String::new(),
            while_counter: 0,
            if_counter: 0,
        }
    }

    /// Compiles `class` to VM text.
    ///
    /// Registers the class-level declarations first, then emits every
    /// subroutine in source order. Consumes `self` since a `Codegen` is
    /// single-use (one class per instance).
    pub fn compile(mut self, class: &Class) -> Result<String, CodegenError> {
        self.class_name = class.name.clone();

        for var in &class.class_var_decs {
            let kind = match var.kind {
                crate::ast::ClassVarKind::Static => Kind::Static,
                crate::ast::ClassVarKind::Field => Kind::Field,
            };
            self.symbol_table.define(var.name.clone(), var.ty.clone(), kind);
        }

        for sub in &class.subroutine_decs {
            self.compile_subroutine(sub)?;
        }

        Ok(self.writer.into_inner())
    }

    fn compile_subroutine(&mut self, sub: &SubroutineDec) -> Result<(), CodegenError> {
        self.symbol_table.start_subroutine();

        if sub.kind == SubroutineKind::Method {
            self.symbol_table.define(
                "this",
                Type::ClassName(self.class_name.clone()),
                Kind::Argument,
            );
        }

        for param in &sub.params {
            self.symbol_table
                .define(param.name.clone(), param.ty.clone(), Kind::Argument);
        }

        for var in &sub.body.var_decs {
            self.symbol_table
                .define(var.name.clone(), var.ty.clone(), Kind::Local);
        }

        let n_locals = self.symbol_table.count(Kind::Local);
        self.writer
            .function_decl(&format!("{}.{}", self.class_name, sub.name), n_locals);

        match sub.kind {
            SubroutineKind::Constructor => {
                let n_fields = self.symbol_table.count(Kind::Field);
                self.writer.push(vm::Segment::Constant, n_fields);
                self.writer.call("Memory.alloc", 1);
                self.writer.pop(vm::Segment::Pointer, 0);
            }
            SubroutineKind::Method => {
                self.writer.push(vm::Segment::Argument, 0);
                self.writer.pop(vm::Segment::Pointer, 0);
            }
            SubroutineKind::Function => {}
        }

        for stmt in &sub.body.statements {
            self.compile_stmt(stmt)?;
        }

        Ok(())
    }
}
