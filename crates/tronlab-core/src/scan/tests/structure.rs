//! Structural diagnostics produced by the scanner

use super::*;
use crate::diagnostic::{DiagnosticCode, Severity};
use crate::position::Span;

fn codes(result: &ScanResult) -> Vec<DiagnosticCode> {
    result.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn test_empty_placeholder_spans_whole_token() {
    let result = scan("@[]@");
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.message, "Empty placeholder detected");
    assert_eq!(diagnostic.span, Span::on_line(0, 0, 4));
    assert!(result.occurrences.is_empty());
}

#[test]
fn test_whitespace_only_placeholder_is_empty() {
    let result = scan("let x = @[   ]@;");
    assert_eq!(codes(&result), vec![DiagnosticCode::EmptyPlaceholder]);
    assert_eq!(result.diagnostics[0].span, Span::on_line(0, 8, 15));
    assert!(result.occurrences.is_empty());
}

#[test]
fn test_unmatched_brackets_spans_whole_line() {
    let result = scan("fn @[name]@(@[params) {}");
    assert_eq!(codes(&result), vec![DiagnosticCode::UnmatchedBrackets]);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.span, Span::on_line(0, 0, 24));
}

#[test]
fn test_bracket_check_ignores_ordering() {
    // Counts are equal, so this passes even though the order is reversed
    let result = scan("]@ reversed @[");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_double_at_each_occurrence() {
    let result = scan("Hello @@ world @@");
    assert_eq!(
        codes(&result),
        vec![DiagnosticCode::DoubleAt, DiagnosticCode::DoubleAt]
    );
    assert_eq!(result.diagnostics[0].span, Span::on_line(0, 6, 8));
    assert_eq!(result.diagnostics[1].span, Span::on_line(0, 15, 17));
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_double_at_is_non_overlapping() {
    let result = scan("@@@");
    assert_eq!(codes(&result), vec![DiagnosticCode::DoubleAt]);
    assert_eq!(result.diagnostics[0].span, Span::on_line(0, 0, 2));
}

#[test]
fn test_check_order_within_line() {
    // empty placeholder, then bracket count, then double-at
    let result = scan("@@ @[]@ @[");
    assert_eq!(
        codes(&result),
        vec![
            DiagnosticCode::EmptyPlaceholder,
            DiagnosticCode::UnmatchedBrackets,
            DiagnosticCode::DoubleAt,
        ]
    );
}

#[test]
fn test_lines_are_checked_independently() {
    let result = scan("ok @[a_name]@\nbroken @[\n@[]@");
    assert_eq!(
        codes(&result),
        vec![
            DiagnosticCode::UnmatchedBrackets,
            DiagnosticCode::EmptyPlaceholder,
        ]
    );
    assert_eq!(result.diagnostics[0].span.start.line, 1);
    assert_eq!(result.diagnostics[1].span.start.line, 2);
}

#[test]
fn test_columns_count_characters() {
    let result = scan("ñ @[]@");
    assert_eq!(result.diagnostics[0].span, Span::on_line(0, 2, 6));
}

#[test]
fn test_plain_text_has_no_diagnostics() {
    let result = scan("pub fn main() {\n    println!(\"hi\");\n}\n");
    assert!(result.diagnostics.is_empty());
    assert!(result.occurrences.is_empty());
}
