//! Error reporting
//!
//! The plain form is the one-line `[line N] Error: ...` contract. The pretty
//! form uses ariadne to show the offending spot in its source line.

use crate::errors::ScanError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;

/// Format errors one per line, in the order they were recorded
pub fn format_plain(errors: &[ScanError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print an error with source context to stderr
pub fn print_error(source: &str, filename: &str, error: &ScanError) {
    if let Err(e) = build_report(source, filename, error, true).eprint(Source::from(source)) {
        log::warn!("failed to print diagnostic report: {}", e);
        eprintln!("{}", error);
    }
}

/// Print multiple errors
pub fn print_errors(source: &str, filename: &str, errors: &[ScanError]) {
    for error in errors {
        print_error(source, filename, error);
    }
}

/// Format an error with source context as an uncoloured string
pub fn format_error(source: &str, filename: &str, error: &ScanError) -> String {
    let mut output = Vec::new();

    if build_report(source, filename, error, false)
        .write(Source::from(source), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8_lossy(&output).into_owned()
}

fn build_report<'a>(
    source: &str,
    filename: &str,
    error: &ScanError,
    color: bool,
) -> Report<'a, Range<usize>> {
    let span = error_span(source, error);
    let label = match error {
        ScanError::UnexpectedCharacter { .. } => "not part of any token",
        ScanError::UnterminatedString { .. } => "string starts here and is never closed",
    };

    Report::build(ReportKind::Error, span.clone())
        .with_config(Config::default().with_color(color))
        .with_message(format!("{}:{}: {}", filename, error.line(), error.message()))
        .with_label(
            Label::new(span)
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
}

/// Character range an error points at
fn error_span(source: &str, error: &ScanError) -> Range<usize> {
    let start = line_col_to_offset(source, error.line(), error.column());

    match error {
        ScanError::UnexpectedCharacter { .. } => start..start + 1,
        ScanError::UnterminatedString { line, column } => {
            let line_len = source
                .lines()
                .nth(line.saturating_sub(1))
                .map_or(0, |l| l.chars().count());
            let rest = line_len.saturating_sub(column.saturating_sub(1));
            start..start + rest.max(1)
        }
    }
}

/// Get the character offset of a 1-based line and column.
///
/// Positions past the end of the source clamp to the source length.
pub fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    let mut current_col = 1;

    for (i, c) in source.chars().enumerate() {
        if current_line == line && current_col == column {
            return i;
        }
        if c == '\n' {
            current_line += 1;
            current_col = 1;
        } else {
            current_col += 1;
        }
    }

    source.chars().count()
}
