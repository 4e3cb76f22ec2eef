//! Placeholder naming conventions

use super::{Check, CheckContext};
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::scan::Occurrence;
use std::collections::HashSet;

/// Per-occurrence naming rules
pub struct NamingCheck;

impl Check for NamingCheck {
    fn name(&self) -> &str {
        "naming"
    }

    fn run(&self, context: &CheckContext) -> Vec<Diagnostic> {
        context
            .scan
            .well_formed()
            .flat_map(|occ| check_name(occ, context.config.min_placeholder_length))
            .collect()
    }
}

/// Apply every naming rule to one occurrence; rules are independent
pub fn check_name(occurrence: &Occurrence, min_length: usize) -> Vec<Diagnostic> {
    let name = occurrence.name.as_str();
    let span = occurrence.name_span;
    let mut diagnostics = Vec::new();

    if name.chars().count() < min_length {
        diagnostics.push(Diagnostic::warning(
            DiagnosticCode::NameTooShort,
            span,
            format!(
                "Placeholder name '{}' is shorter than minimum length of {}",
                name, min_length
            ),
        ));
    }

    if name.contains(' ') {
        diagnostics.push(Diagnostic::error(
            DiagnosticCode::NameContainsSpaces,
            span,
            format!("Placeholder name '{}' contains spaces", name),
        ));
    }

    if name.chars().any(char::is_uppercase) {
        diagnostics.push(Diagnostic::information(
            DiagnosticCode::NameNotSnakeCase,
            span,
            format!("Consider using snake_case for placeholder '{}'", name),
        ));
    }

    if name.chars().all(|c| c.is_ascii_digit()) {
        diagnostics.push(Diagnostic::information(
            DiagnosticCode::NameNumericOnly,
            span,
            format!(
                "Placeholder '{}' consists only of numbers - consider using descriptive names",
                name
            ),
        ));
    }

    diagnostics
}

/// Document-wide pass: one finding per distinct single-letter name
pub struct SingleLetterCheck;

impl Check for SingleLetterCheck {
    fn name(&self) -> &str {
        "single-letter"
    }

    fn run(&self, context: &CheckContext) -> Vec<Diagnostic> {
        let mut reported = HashSet::new();

        context
            .scan
            .well_formed()
            .filter(|occ| occ.name.chars().count() == 1)
            .filter(|occ| reported.insert(occ.name.as_str()))
            .map(|occ| {
                Diagnostic::information(
                    DiagnosticCode::SingleLetterName,
                    occ.name_span,
                    format!("Single-letter placeholder '{}' might be unclear", occ.name),
                )
            })
            .collect()
    }
}
