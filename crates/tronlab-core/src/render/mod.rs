//! Placeholder substitution
//!
//! Replaces every `@[name]@` token whose trimmed name is in the value map,
//! so `@[ name ]@` and `@[name]@` render from the same entry. Tokens are
//! found with the scanner's tokenizer and never span lines.

mod values;

pub use values::{load_values, parse_assignment, parse_values};

use crate::scan::tokenize::TokenStream;
use indexmap::IndexMap;

/// Name to substitution string, in insertion order
pub type ValueMap = IndexMap<String, String>;

/// Render `text` with `values`
///
/// Single pass: inserted values are never scanned again, so a value that
/// itself looks like a placeholder stays as written. Unmapped placeholders
/// are left unchanged.
pub fn render(text: &str, values: &ValueMap) -> String {
    if values.is_empty() || !text.contains("@[") {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            output.push('\n');
        }
        render_line(line, values, &mut output);
    }
    output
}

fn render_line(line: &str, values: &ValueMap, out: &mut String) {
    let mut copied = 0;
    for token in TokenStream::new(line) {
        let name = token.content(line).trim();
        if name.is_empty() {
            continue;
        }
        if let Some(value) = values.get(name) {
            out.push_str(&line[copied..token.start]);
            out.push_str(value);
            copied = token.end;
        }
    }
    out.push_str(&line[copied..]);
}
