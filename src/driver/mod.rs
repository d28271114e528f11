//! File and directory compilation orchestration.
//!
//! This module is the only place that touches a file handle: the lexer,
//! parser, and code generator are pure functions over in-memory text.
//! `compile_file` runs that pipeline end to end for one `.jack` file and
//! writes its sibling `.vm` file; `compile_path` dispatches on whether
//! the CLI's argument is a file or a directory, fanning out one
//! independent task per file in directory mode (spec.md §5) via
//! [`rayon`]'s work-stealing pool.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::codegen::{Codegen, CodegenError};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};

/// A compilation error from any phase of the pipeline.
pub enum CompileError {
    /// The source file could not be read, or the `.vm` file could not be
    /// written.
    Io(std::io::Error),
    /// A lexical error (an unterminated string or an out-of-range
    /// integer constant).
    Lex(LexError),
    /// A grammar violation.
    Parse(ParseError),
    /// An internal code generation assertion failure.
    Codegen(CodegenError),
}

impl CompileError {
    /// The source location of this error, if it carries one. I/O errors
    /// never do.
    pub fn span(&self) -> Option<crate::token::Span> {
        match self {
            CompileError::Io(_) => None,
            CompileError::Lex(e) => Some(e.span),
            CompileError::Parse(e) => Some(e.span()),
            CompileError::Codegen(e) => e.span(),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<CodegenError> for CompileError {
    fn from(err: CodegenError) -> Self {
        CompileError::Codegen(err)
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Io(e) => write!(f, "{e}"),
            CompileError::Lex(e) => write!(f, "{e}"),
            CompileError::Parse(e) => write!(f, "{e}"),
            CompileError::Codegen(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompileError {}

/// A compilation error together with enough context to render a
/// diagnostic: the offending file's name and its source text (empty for
/// an I/O error that occurred before any source was read).
pub struct CompileErrorWithContext {
    filename: String,
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Runs the lexer, parser, and code generator over `source`, returning
/// the generated VM text.
fn compile_source(source: &str) -> Result<String, CompileError> {
    let tokens = Lexer::new(source).tokenize()?;
    let class = Parser::new(tokens).parse()?;
    let vm_text = Codegen::new().compile(&class)?;
    Ok(vm_text)
}

/// Compiles a single `.jack` file, writing its VM text to the sibling
/// `<basename>.vm` path.
pub fn compile_file(path: &Path) -> Result<(), CompileErrorWithContext> {
    let filename = path.display().to_string();

    let source = std::fs::read_to_string(path).map_err(|e| CompileErrorWithContext {
        filename: filename.clone(),
        source: String::new(),
        error: CompileError::Io(e),
    })?;

    let vm_text = compile_source(&source).map_err(|error| CompileErrorWithContext {
        filename: filename.clone(),
        source: source.clone(),
        error,
    })?;

    let output_path = path.with_extension("vm");
    std::fs::write(&output_path, vm_text).map_err(|e| CompileErrorWithContext {
        filename,
        source,
        error: CompileError::Io(e),
    })?;

    Ok(())
}

/// Every immediate (non-recursive) `.jack` child of `dir`, in directory
/// iteration order.
fn jack_files_in(dir: &Path) -> Result<Vec<PathBuf>, CompileErrorWithContext> {
    let entries = std::fs::read_dir(dir).map_err(|e| CompileErrorWithContext {
        filename: dir.display().to_string(),
        source: String::new(),
        error: CompileError::Io(e),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CompileErrorWithContext {
            filename: dir.display().to_string(),
            source: String::new(),
            error: CompileError::Io(e),
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "jack") {
            files.push(path);
        }
    }
    Ok(files)
}

/// Compiles `path`: a single file if it names a `.jack` file, or every
/// immediate `.jack` child if it names a directory. Each file in
/// directory mode is an independent task (its own lexer, parser, symbol
/// table, and generator instance; no shared state beyond the
/// filesystem), compiled in parallel; one file's failure does not
/// prevent attempts on the others, but every error encountered is
/// returned.
pub fn compile_path(path: &Path) -> Vec<CompileErrorWithContext> {
    if path.is_dir() {
        let files = match jack_files_in(path) {
            Ok(files) => files,
            Err(e) => return vec![e],
        };
        files
            .par_iter()
            .filter_map(|file| compile_file(file).err())
            .collect()
    } else {
        compile_file(path).err().into_iter().collect()
    }
}
