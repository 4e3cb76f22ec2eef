//! Placeholder scanner
//!
//! Finds every `@[name]@` token in a document and reports structurally
//! malformed lines. The notation never spans lines, so each line is scanned
//! independently.
//!
//! ## Token syntax
//!
//! - Opener `@[`, one or more characters other than `]`, closer `]@`
//! - Surrounding whitespace inside the brackets is trimmed to form the name
//! - `@[]@` and `@[   ]@` are not placeholders; they are reported as empty

mod structure;
pub(crate) mod tokenize;

#[cfg(test)]
mod tests;

use crate::diagnostic::Diagnostic;
use crate::position::{Span, char_column};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use tokenize::TokenStream;

/// One placeholder token in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Content between the delimiters, untrimmed
    pub raw_name: String,
    /// Trimmed content; the placeholder's identity
    pub name: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column of the name's first character
    pub column: usize,
    /// Whole `@[...]@` token (0-based)
    pub token: Span,
    /// The trimmed name inside the token (0-based)
    pub name_span: Span,
    /// Byte offsets of the whole token within the document
    pub byte_range: Range<usize>,
    /// Whether the token's line has balanced `@[`/`]@` counts
    pub well_formed: bool,
}

/// Output of one scan pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Occurrences in document order
    pub occurrences: Vec<Occurrence>,
    /// Structural diagnostics in check order
    pub diagnostics: Vec<Diagnostic>,
    /// Number of `\n`-separated lines (an empty text has one line)
    pub line_count: usize,
}

impl ScanResult {
    /// Distinct placeholder names in order of first appearance
    pub fn unique_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.occurrences
            .iter()
            .filter(|occ| seen.insert(occ.name.as_str()))
            .map(|occ| occ.name.clone())
            .collect()
    }

    /// Occurrences on structurally well-formed lines
    pub fn well_formed(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.iter().filter(|occ| occ.well_formed)
    }
}

/// Scan `text` for placeholders and structural problems
pub fn scan(text: &str) -> ScanResult {
    let mut result = ScanResult::default();
    let mut line_offset = 0;

    for (line_index, line) in text.split('\n').enumerate() {
        let balanced = structure::check_line(line, line_index, &mut result.diagnostics);

        for token in TokenStream::new(line) {
            let raw = token.content(line);
            let name = raw.trim();
            if name.is_empty() {
                // Reported by the empty-placeholder check
                continue;
            }

            let leading = raw.len() - raw.trim_start().len();
            let name_start = char_column(line, token.content_start + leading);
            let name_end = name_start + name.chars().count();

            result.occurrences.push(Occurrence {
                raw_name: raw.to_string(),
                name: name.to_string(),
                line: line_index + 1,
                column: name_start + 1,
                token: Span::on_line(
                    line_index,
                    char_column(line, token.start),
                    char_column(line, token.end),
                ),
                name_span: Span::on_line(line_index, name_start, name_end),
                byte_range: line_offset + token.start..line_offset + token.end,
                well_formed: balanced,
            });
        }

        result.line_count += 1;
        line_offset += line.len() + 1;
    }

    tracing::debug!(
        occurrences = result.occurrences.len(),
        diagnostics = result.diagnostics.len(),
        lines = result.line_count,
        "Scanned template"
    );

    result
}
