//! Structural checks for one line of template text

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::position::{Span, char_column};

const OPEN: &str = "@[";
const CLOSE: &str = "]@";
const DOUBLE_AT: &str = "@@";

/// Run every structural check on `line`, appending findings to `out`
///
/// Checks run in a fixed order: empty placeholders, bracket counts, double
/// `@`. Returns whether the line's `@[`/`]@` counts are balanced.
pub(crate) fn check_line(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) -> bool {
    check_empty_placeholders(line, line_index, out);
    let balanced = check_bracket_counts(line, line_index, out);
    check_double_at(line, line_index, out);
    balanced
}

/// `@[` followed only by whitespace and then `]@`
fn check_empty_placeholders(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) {
    let mut from = 0;
    while let Some(found) = line[from..].find(OPEN) {
        let open = from + found;
        let after = open + OPEN.len();
        let rest = &line[after..];
        let close = after + (rest.len() - rest.trim_start().len());

        if line[close..].starts_with(CLOSE) {
            let end = close + CLOSE.len();
            out.push(Diagnostic::error(
                DiagnosticCode::EmptyPlaceholder,
                Span::on_line(line_index, char_column(line, open), char_column(line, end)),
                "Empty placeholder detected",
            ));
            from = end;
        } else {
            // '@' is one byte, so open + 1 is a char boundary
            from = open + 1;
        }
    }
}

/// Compares counts only; `]@ ... @[` on one line passes.
fn check_bracket_counts(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) -> bool {
    let open_count = line.matches(OPEN).count();
    let close_count = line.matches(CLOSE).count();

    if open_count == close_count {
        return true;
    }

    out.push(Diagnostic::error(
        DiagnosticCode::UnmatchedBrackets,
        Span::on_line(line_index, 0, line.chars().count()),
        "Unmatched placeholder brackets",
    ));
    false
}

fn check_double_at(line: &str, line_index: usize, out: &mut Vec<Diagnostic>) {
    for (index, _) in line.match_indices(DOUBLE_AT) {
        let column = char_column(line, index);
        out.push(Diagnostic::warning(
            DiagnosticCode::DoubleAt,
            Span::on_line(line_index, column, column + DOUBLE_AT.len()),
            "Double @ symbols detected - possible malformed placeholder",
        ));
    }
}
