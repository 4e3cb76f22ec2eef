//! Preview command - terminal version of the live preview panel

use crate::context::Context;
use crate::output::{SCHEMA_VERSION, print_json};
use anyhow::{Result, anyhow};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tronlab_core::Diagnostic;
use tronlab_core::config::consts::TEMPLATE_LANGUAGE_ID;
use tronlab_host::{Preview, Session};

#[derive(Debug, Serialize)]
struct PreviewOutput<'a> {
    schema_version: &'static str,
    #[serde(flatten)]
    preview: &'a Preview,
}

pub fn run(ctx: &Context, file: &Path, set: &[String], json: bool) -> Result<i32> {
    let overrides = super::parse_assignments(set)?;
    let mut document = super::read_template(file)?;
    let id = document.id.clone();

    // Previewing any file the user points at, whatever its extension
    document.language_id = TEMPLATE_LANGUAGE_ID.to_string();

    let mut session = Session::new(ctx.config.clone());
    session.did_open(document);
    let preview = session
        .preview(&id, &overrides)
        .ok_or_else(|| anyhow!("Failed to preview {}", file.display()))?;

    if json {
        print_json(&PreviewOutput {
            schema_version: SCHEMA_VERSION,
            preview: &preview,
        })?;
    } else {
        print_preview(&preview, &session.diagnostics(&id));
    }

    Ok(0)
}

/// Human-readable preview, shared with `watch --preview`
pub(crate) fn print_preview(preview: &Preview, diagnostics: &[Diagnostic]) {
    let analysis = &preview.analysis;

    println!("{} {}", "Template Type:".bold(), analysis.template_type.label());
    println!(
        "{} {} lines, {} characters, {} placeholder(s), {} issue(s)",
        "Stats:".bold(),
        analysis.line_count,
        analysis.character_count,
        analysis.placeholders.len(),
        diagnostics.len()
    );

    if !preview.values.is_empty() {
        println!();
        println!("{}", "Placeholders:".bold());
        for name in &analysis.placeholders {
            let value = preview.values.get(name).map(String::as_str).unwrap_or_default();
            println!("  @[{}]@ {} {}", name.cyan(), "→".dimmed(), value);
        }
    }

    println!();
    println!("{}", "Rendered:".bold());
    println!("{}", preview.rendered);
}
