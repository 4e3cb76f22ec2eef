//! CLI command implementations

pub mod analyze;
pub mod preview;
pub mod render;
pub mod snippet;
pub mod validate;
pub mod watch;

use anyhow::{Context as _, Result};
use std::path::Path;
use tronlab_core::ValueMap;
use tronlab_core::render::parse_assignment;
use tronlab_host::Document;

/// Read a template, warning when it does not look like one
pub(crate) fn read_template(path: &Path) -> Result<Document> {
    let document = Document::open(path)?;
    if !document.is_template() {
        tracing::warn!(
            path = %path.display(),
            "File does not have a .tron or .tpl extension, analyzing anyway"
        );
    }
    Ok(document)
}

/// Parse repeated `--set NAME=VALUE` arguments, later ones winning
pub(crate) fn parse_assignments(assignments: &[String]) -> Result<ValueMap> {
    let mut values = ValueMap::new();
    for assignment in assignments {
        let (name, value) =
            parse_assignment(assignment).context("Invalid --set argument")?;
        values.insert(name, value);
    }
    Ok(values)
}
