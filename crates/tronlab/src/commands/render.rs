//! Render command - substitute placeholder values

use anyhow::{Context as _, Result};
use std::path::Path;
use tronlab_core::render::load_values;
use tronlab_core::{ValueMap, analyze, render};

/// Build the value map and render
///
/// Precedence, lowest first: samples (`--samples`), values file, `--set`.
pub fn run(
    file: &Path,
    set: &[String],
    values_file: Option<&Path>,
    samples: bool,
    output: Option<&Path>,
) -> Result<i32> {
    let document = super::read_template(file)?;

    let mut values = if samples {
        analyze(&document.text).sample_values
    } else {
        ValueMap::new()
    };
    if let Some(path) = values_file {
        let loaded = load_values(path)
            .with_context(|| format!("Failed to load values from {}", path.display()))?;
        values.extend(loaded);
    }
    values.extend(super::parse_assignments(set)?);

    let rendered = render(&document.text, &values);
    tracing::debug!(values = values.len(), "Rendered template");

    match output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(0)
}
