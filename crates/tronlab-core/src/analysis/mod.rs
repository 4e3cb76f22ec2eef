//! Template analysis summary

pub mod classify;
pub mod samples;

pub use classify::{TemplateType, classify};
pub use samples::sample_value;

use crate::render::{ValueMap, render};
use crate::scan::{Occurrence, scan};
use serde::{Deserialize, Serialize};

/// Everything a preview needs to know about one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateAnalysis {
    /// Distinct trimmed names, first appearance first
    pub placeholders: Vec<String>,
    /// All occurrences in document order
    pub occurrences: Vec<Occurrence>,
    pub template_type: TemplateType,
    /// One inferred value per distinct name
    pub sample_values: ValueMap,
    pub line_count: usize,
    /// Unicode scalar values in the whole text
    pub character_count: usize,
}

impl TemplateAnalysis {
    /// Sample values overlaid with `overrides`
    ///
    /// An empty override keeps the sample.
    pub fn values_with(&self, overrides: &ValueMap) -> ValueMap {
        let mut values = self.sample_values.clone();
        for (name, value) in overrides {
            if !value.is_empty() {
                values.insert(name.clone(), value.clone());
            }
        }
        values
    }

    /// Render `text` with the sample values overlaid by `overrides`
    pub fn render_preview(&self, text: &str, overrides: &ValueMap) -> String {
        render(text, &self.values_with(overrides))
    }
}

/// Analyze `text`: placeholders, type, sample values, stats
pub fn analyze(text: &str) -> TemplateAnalysis {
    let scanned = scan(text);
    let placeholders = scanned.unique_names();
    let sample_values = placeholders
        .iter()
        .map(|name| (name.clone(), sample_value(name)))
        .collect();
    let template_type = classify(text);

    tracing::debug!(
        placeholders = placeholders.len(),
        template_type = template_type.label(),
        "Analyzed template"
    );

    TemplateAnalysis {
        placeholders,
        occurrences: scanned.occurrences,
        template_type,
        sample_values,
        line_count: scanned.line_count,
        character_count: text.chars().count(),
    }
}
