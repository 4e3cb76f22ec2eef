//! Analyze command - placeholders, type and sample values

use crate::output::{SCHEMA_VERSION, print_json};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tronlab_core::{TemplateAnalysis, analyze};

#[derive(Debug, Serialize)]
struct AnalyzeOutput<'a> {
    schema_version: &'static str,
    path: String,
    #[serde(flatten)]
    analysis: &'a TemplateAnalysis,
}

pub fn run(file: &Path, json: bool) -> Result<i32> {
    let document = super::read_template(file)?;
    let analysis = analyze(&document.text);

    if json {
        print_json(&AnalyzeOutput {
            schema_version: SCHEMA_VERSION,
            path: file.display().to_string(),
            analysis: &analysis,
        })?;
    } else {
        render_human(file, &analysis);
    }

    Ok(0)
}

fn render_human(file: &Path, analysis: &TemplateAnalysis) {
    println!("{} {}", "→".cyan(), file.display());
    println!("  Type:         {}", analysis.template_type.label().bold());
    println!("  Lines:        {}", analysis.line_count);
    println!("  Characters:   {}", analysis.character_count);
    println!(
        "  Placeholders: {} unique, {} total",
        analysis.placeholders.len(),
        analysis.occurrences.len()
    );

    if analysis.placeholders.is_empty() {
        return;
    }

    println!();
    for name in &analysis.placeholders {
        let sample = analysis
            .sample_values
            .get(name)
            .map(String::as_str)
            .unwrap_or_default();
        let uses = analysis
            .occurrences
            .iter()
            .filter(|occ| &occ.name == name)
            .count();
        println!("  {} {} (x{}) = {}", "•".cyan(), name.bold(), uses, sample.dimmed());
    }
}
