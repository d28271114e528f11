//! Rendering compile errors as terminal diagnostics.
//!
//! Every error that carries a [`Span`] is rendered as an [`ariadne`]
//! report with a red label under the offending range; an error with no
//! span (an I/O failure, or a [`CodegenError`] constructed via
//! [`CodegenError::without_span`]) falls back to a plain `eprintln!`.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileErrorWithContext;
use crate::token::Span;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_at_span(filename: &str, source: &str, span: Span, message: &str) {
    if let Err(report_err) = print_range_report(filename, source, span.start..span.end, message) {
        eprintln!("{filename}:{}:{}: {message}", span.line, span.column);
        eprintln!("(failed to render detailed report: {report_err})");
    }
}

/// Prints `error` to stderr, using `ariadne` when the error carries a
/// span and a plain message otherwise.
pub(crate) fn report_error(context: &CompileErrorWithContext) {
    let filename = context.filename();
    let source = context.source();
    let error = context.error();

    match error.span() {
        Some(span) => report_at_span(filename, source, span, &error.to_string()),
        None => eprintln!("{filename}: {error}"),
    }
}

/// Reports every error collected from a [`crate::driver::compile_path`]
/// run.
pub fn report_errors(errors: &[CompileErrorWithContext]) {
    for context in errors {
        report_error(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::compile_path;
    use std::io::Write;

    #[test]
    fn test_report_error_with_span_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.jack");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "class Main {{ function void main() {{ let = 1; }} }}").unwrap();

        let errors = compile_path(&path);
        assert_eq!(errors.len(), 1);
        report_error(&errors[0]);
    }

    #[test]
    fn test_report_error_without_span_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.jack");

        let errors = compile_path(&path);
        assert_eq!(errors.len(), 1);
        report_error(&errors[0]);
    }

    #[test]
    fn test_report_errors_handles_multiple() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A.jack"), "class A { function void f() { let = 1; } }")
            .unwrap();
        std::fs::write(dir.path().join("B.jack"), "class B { function void g() { let = 2; } }")
            .unwrap();

        let errors = compile_path(dir.path());
        assert_eq!(errors.len(), 2);
        report_errors(&errors);
    }
}
