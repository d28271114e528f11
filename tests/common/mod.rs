//! Shared fixtures for integration tests.
//!
//! Every test here drives the crate the way the CLI does: write a
//! `.jack` file to a temporary directory, hand its path to
//! [`jackc::driver`], and read back the `.vm` sibling it produces.

use std::path::Path;
use tempfile::TempDir;

/// Writes `source` to `<dir>/<class_name>.jack`.
pub fn write_class(dir: &Path, class_name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.join(format!("{class_name}.jack"));
    std::fs::write(&path, source).expect("failed to write fixture");
    path
}

/// Compiles a single class and returns its VM text, panicking on any
/// compile error.
pub fn compile_ok(source: &str) -> String {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = write_class(dir.path(), "Main", source);

    let errors = jackc::driver::compile_path(&path);
    assert!(errors.is_empty(), "expected success, got errors");

    std::fs::read_to_string(path.with_extension("vm")).expect("missing .vm output")
}

/// Compiles a single class and returns the compile errors (never calls
/// the caller's test harness assertion machinery itself).
pub fn compile_err(source: &str) -> Vec<jackc::driver::CompileErrorWithContext> {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = write_class(dir.path(), "Main", source);
    jackc::driver::compile_path(&path)
}
