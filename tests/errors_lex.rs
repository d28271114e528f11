//! Error-path tests for the lexical phase, exercised through the full
//! driver pipeline so the assertions cover `CompileError::Lex` wiring
//! end to end.

mod common;

use common::compile_err;
use jackc::driver::CompileError;

#[test]
fn unterminated_string_is_reported_as_lex_error() {
    let errors = compile_err(
        "class Main { function void main() { do Output.printString(\"oops); return; } }",
    );
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].error(), CompileError::Lex(_)));
}

#[test]
fn integer_literal_over_word_size_is_reported() {
    let errors = compile_err(
        "class Main { function void main() { do Output.printInt(99999); return; } }",
    );
    assert_eq!(errors.len(), 1);
    // The lexer accepts any digit run; the parser is what rejects an
    // out-of-range value, so this surfaces as a Parse error wrapping a
    // LexError, not a bare Lex error.
    assert!(matches!(errors[0].error(), CompileError::Parse(_)));
}
