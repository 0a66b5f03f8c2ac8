//! Error rendering using ariadne
//!
//! This module renders evaluation errors with a source snippet, a label
//! under the failing part of the expression, and help notes.

use crate::{Diagnostic, EvalError};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use smartcalc::{CalculatorFactory, render_error};
///
/// let mut calc = CalculatorFactory::instance().create("basic").unwrap();
/// if let Err(e) = calc.calculate("1 / 0") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &EvalError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &EvalError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(error.source_text(), &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Zero-width spans (end of input) still need a visible label.
    let span = if diag.span.0.is_empty() && diag.span.0.start < source.len() {
        diag.span.0.start..diag.span.0.start + 1
    } else {
        diag.span.0.clone()
    };

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Environment, evaluate};

    fn render(source: &str, environment: &Environment) -> String {
        let err = evaluate(source, environment).unwrap_err();
        render_error_to_string_no_color(&err)
    }

    #[test]
    fn test_render_runtime_error() {
        let output = render("1 + 10 // 0", &Environment::empty());
        assert!(output.contains("[E004]"), "{}", output);
        assert!(output.contains("integer division or modulo by zero"), "{}", output);
        assert!(output.contains("1 + 10 // 0"), "{}", output);
        assert!(output.contains(SOURCE_ID), "{}", output);
    }

    #[test]
    fn test_render_name_error_with_help() {
        let output = render("log(2)", &Environment::scientific());
        assert!(output.contains("name 'log' is not defined"), "{}", output);
        assert!(output.contains("Help"), "{}", output);
    }

    #[test]
    fn test_render_parse_error() {
        let output = render("2 +", &Environment::empty());
        assert!(output.contains("[P001]"), "{}", output);
        assert!(output.contains("2 +"), "{}", output);
    }

    #[test]
    fn test_no_color_has_no_escape_codes() {
        let output = render("1 / 0", &Environment::empty());
        assert!(!output.contains('\u{1b}'), "{:?}", output);
    }
}
