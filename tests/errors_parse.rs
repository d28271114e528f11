//! Error-path tests for the grammar-violation phase.

mod common;

use common::compile_err;
use jackc::driver::CompileError;

#[test]
fn missing_semicolon_is_a_parse_error() {
    let errors = compile_err(
        "class Main { function void main() { return } }",
    );
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].error(), CompileError::Parse(_)));
}

#[test]
fn missing_class_keyword_is_a_parse_error() {
    let errors = compile_err("Main { function void main() { return; } }");
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].error(), CompileError::Parse(_)));
}

#[test]
fn error_carries_a_span_for_diagnostics() {
    let errors = compile_err("class Main { function void main() { return } }");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].error().span().is_some());
}
