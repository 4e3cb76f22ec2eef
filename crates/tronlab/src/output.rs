//! Shared output helpers

use colored::Colorize;
use serde::Serialize;
use tronlab_core::{Diagnostic, Severity};

/// Version of every `--json` document
pub const SCHEMA_VERSION: &str = "1.0";

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn severity_icon(severity: Severity) -> String {
    match severity {
        Severity::Error => "✗".red().to_string(),
        Severity::Warning => "⚠".yellow().to_string(),
        Severity::Information => "ℹ".blue().to_string(),
    }
}

/// One diagnostic as `  icon line:col severity message [code]`
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
        Severity::Information => "info".blue(),
    };
    format!(
        "  {} {} {} {} {}",
        severity_icon(diagnostic.severity),
        diagnostic.span.start.to_string().dimmed(),
        severity,
        diagnostic.message,
        format!("[{}]", diagnostic.code).dimmed()
    )
}

/// Closing line with per-severity counts
pub fn format_summary(errors: usize, warnings: usize, information: usize) -> String {
    if errors > 0 {
        format!(
            "{} {} error(s), {} warning(s), {} info",
            "✗".red().bold(),
            errors,
            warnings,
            information
        )
    } else if warnings > 0 {
        format!(
            "{} {} warning(s), {} info",
            "⚠".yellow().bold(),
            warnings,
            information
        )
    } else if information > 0 {
        format!("{} No problems, {} info", "✓".green().bold(), information)
    } else {
        format!("{} No problems found", "✓".green().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_picks_worst_icon() {
        colored::control::set_override(false);
        assert_eq!(format_summary(1, 2, 3), "✗ 1 error(s), 2 warning(s), 3 info");
        assert_eq!(format_summary(0, 2, 0), "⚠ 2 warning(s), 0 info");
        assert_eq!(format_summary(0, 0, 1), "✓ No problems, 1 info");
        assert_eq!(format_summary(0, 0, 0), "✓ No problems found");
    }
}
