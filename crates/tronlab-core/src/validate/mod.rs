//! Validation engine
//!
//! Runs every registered check over one scan of the document and merges the
//! findings into a single list ordered by position. Checks never suppress
//! each other: each one sees the full input.

pub mod content;
pub mod naming;

use crate::config::ValidationConfig;
use crate::diagnostic::Diagnostic;
use crate::scan::{ScanResult, scan};

/// Input shared by all checks during one validation pass
pub struct CheckContext<'a> {
    pub text: &'a str,
    pub scan: &'a ScanResult,
    pub config: &'a ValidationConfig,
}

/// A validation rule set
pub trait Check {
    /// Name of this check (for logging)
    fn name(&self) -> &str;

    /// Run the check, returning findings in discovery order
    fn run(&self, context: &CheckContext) -> Vec<Diagnostic>;
}

/// Structural findings already collected by the scanner
pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &str {
        "structure"
    }

    fn run(&self, context: &CheckContext) -> Vec<Diagnostic> {
        context.scan.diagnostics.clone()
    }
}

/// Validation engine - aggregates and runs all checks
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
}

impl Validator {
    /// Create a validator with all built-in checks
    pub fn new() -> Self {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(StructureCheck),
            Box::new(naming::NamingCheck),
            Box::new(naming::SingleLetterCheck),
            Box::new(content::ContentCheck),
        ];
        Self { checks }
    }

    /// Create a validator with a custom set of checks
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Validate `text`, returning diagnostics sorted by position
    ///
    /// Diagnostics at the same position keep discovery order (check order,
    /// then left to right), so identical input always yields identical output.
    pub fn run(&self, text: &str, config: &ValidationConfig) -> Vec<Diagnostic> {
        if !config.enabled {
            tracing::debug!("Validation disabled, returning no diagnostics");
            return Vec::new();
        }

        let scan = scan(text);
        let context = CheckContext {
            text,
            scan: &scan,
            config,
        };

        let mut diagnostics = Vec::new();
        for check in &self.checks {
            let found = check.run(&context);
            tracing::debug!(check = check.name(), found = found.len(), "Ran check");
            diagnostics.extend(found);
        }

        // Stable: ties keep discovery order
        diagnostics.sort_by_key(|d| d.span.start);
        diagnostics
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every built-in check on `text`
///
/// The result replaces any previously reported set for the same document.
pub fn validate(text: &str, config: &ValidationConfig) -> Vec<Diagnostic> {
    Validator::new().run(text, config)
}
