//! Validation findings

use crate::position::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding, ordered `Information < Warning < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Information,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(text)
    }
}

/// Which rule produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    EmptyPlaceholder,
    UnmatchedBrackets,
    DoubleAt,
    NameTooShort,
    NameContainsSpaces,
    NameNotSnakeCase,
    NameNumericOnly,
    SingleLetterName,
    TrailingWhitespace,
    EvalUsage,
    HardcodedPassword,
    HardcodedApiKey,
    ScriptTag,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::EmptyPlaceholder => "empty-placeholder",
            DiagnosticCode::UnmatchedBrackets => "unmatched-brackets",
            DiagnosticCode::DoubleAt => "double-at",
            DiagnosticCode::NameTooShort => "name-too-short",
            DiagnosticCode::NameContainsSpaces => "name-contains-spaces",
            DiagnosticCode::NameNotSnakeCase => "name-not-snake-case",
            DiagnosticCode::NameNumericOnly => "name-numeric-only",
            DiagnosticCode::SingleLetterName => "single-letter-name",
            DiagnosticCode::TrailingWhitespace => "trailing-whitespace",
            DiagnosticCode::EvalUsage => "eval-usage",
            DiagnosticCode::HardcodedPassword => "hardcoded-password",
            DiagnosticCode::HardcodedApiKey => "hardcoded-api-key",
            DiagnosticCode::ScriptTag => "script-tag",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub span: Span,
    pub message: String,
    pub severity: Severity,
    pub code: DiagnosticCode,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            severity: Severity::Error,
            code,
        }
    }

    pub fn warning(code: DiagnosticCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            severity: Severity::Warning,
            code,
        }
    }

    pub fn information(code: DiagnosticCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            severity: Severity::Information,
            code,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.span.start, self.severity, self.code, self.message
        )
    }
}

/// Count diagnostics per severity as `(errors, warnings, information)`
pub fn count_by_severity(diagnostics: &[Diagnostic]) -> (usize, usize, usize) {
    diagnostics
        .iter()
        .fold((0, 0, 0), |(e, w, i), d| match d.severity {
            Severity::Error => (e + 1, w, i),
            Severity::Warning => (e, w + 1, i),
            Severity::Information => (e, w, i + 1),
        })
}
