//! A single-pass compiler for the Jack programming language.
//!
//! Jack is the high-level object-based language of the nand2tetris course.
//! This crate translates one Jack source file — a single class — into a
//! stack-machine virtual-machine assembly file (`.vm`), by walking the
//! parsed class with a scoped symbol table and lowering every statement and
//! expression to a deterministic sequence of push/pop/arithmetic/branch/call
//! opcodes.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (comment stripping, tokenization)
//! - [`parser`] - Recursive-descent parser producing an AST
//! - [`ast`] - Abstract syntax tree definitions
//! - [`symbol_table`] - Two-scope variable resolution
//! - [`codegen`] - AST-directed VM code generation
//! - [`vm`] - The VM instruction text writer
//! - [`driver`] - File/directory compilation orchestration
//! - [`diagnostics`] - Rendering compiler errors to the terminal
//!
//! # Example
//!
//! ```no_run
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//! use jackc::codegen::Codegen;
//!
//! let source = r#"
//! class Main {
//!     function void main() {
//!         do Output.printString("Hello, world!");
//!         return;
//!     }
//! }
//! "#;
//!
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let class = Parser::new(tokens).parse().expect("parse error");
//! let vm_text = Codegen::new().compile(&class).expect("codegen error");
//! assert!(vm_text.contains("function Main.main 0"));
//! ```

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod symbol_table;
pub mod token;
pub mod vm;
