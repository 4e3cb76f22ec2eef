//! Validate command - report diagnostics for templates

use crate::context::Context;
use crate::output::{SCHEMA_VERSION, format_diagnostic, format_summary, print_json};
use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tronlab_core::diagnostic::count_by_severity;
use tronlab_core::{Diagnostic, ValidationConfig, validate};

#[derive(Debug, Serialize)]
struct ValidateOutput {
    schema_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<String>,
    files: Vec<FileReport>,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    diagnostics: Vec<Diagnostic>,
    summary: Summary,
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    information: usize,
}

impl Summary {
    fn of(diagnostics: &[Diagnostic]) -> Self {
        let (errors, warnings, information) = count_by_severity(diagnostics);
        Self {
            errors,
            warnings,
            information,
        }
    }

    fn add(self, other: Summary) -> Self {
        Self {
            errors: self.errors + other.errors,
            warnings: self.warnings + other.warnings,
            information: self.information + other.information,
        }
    }
}

/// Validate each file
///
/// # Exit Code
///
/// 0 unless `strict` is set and at least one error was reported.
/// Unreadable files abort with an error.
pub fn run(ctx: &Context, files: &[PathBuf], json: bool, strict: bool) -> Result<i32> {
    // Order of `files` is preserved by collect
    let reports = files
        .par_iter()
        .map(|path| validate_file(path, &ctx.config.validation))
        .collect::<Result<Vec<_>>>()?;

    let summary = reports
        .iter()
        .fold(Summary::default(), |total, report| total.add(report.summary));

    if json {
        print_json(&ValidateOutput {
            schema_version: SCHEMA_VERSION,
            config: ctx.config_path.as_ref().map(|p| p.display().to_string()),
            files: reports,
            summary,
        })?;
    } else {
        render_human(&reports, summary, ctx.verbose);
    }

    let code = if strict && summary.errors > 0 { 1 } else { 0 };
    Ok(code)
}

fn validate_file(path: &Path, config: &ValidationConfig) -> Result<FileReport> {
    let document = super::read_template(path)?;
    let diagnostics = validate(&document.text, config);
    let summary = Summary::of(&diagnostics);

    Ok(FileReport {
        path: path.to_path_buf(),
        diagnostics,
        summary,
    })
}

fn render_human(reports: &[FileReport], summary: Summary, verbose: bool) {
    for report in reports {
        let icon = if report.summary.errors > 0 {
            "✗".red()
        } else if report.summary.warnings > 0 {
            "⚠".yellow()
        } else {
            "✓".green()
        };
        println!("{} {}", icon, report.path.display());

        for diagnostic in &report.diagnostics {
            println!("{}", format_diagnostic(diagnostic));
        }

        if verbose && report.diagnostics.is_empty() {
            println!("  (no issues)");
        }
    }

    println!();
    println!(
        "{}",
        format_summary(summary.errors, summary.warnings, summary.information)
    );
}
