//! Value map loading

use super::ValueMap;
use crate::error::{Result, TronlabError};
use std::path::Path;

/// Format of a value map file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Load a value map from a `.json` file, or TOML for any other extension
pub fn load_values(path: impl AsRef<Path>) -> Result<ValueMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| TronlabError::DocumentReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let values = match Format::from_path(path) {
        Format::Json => parse_json(&content)?,
        Format::Toml => parse_values(&content)?,
    };

    tracing::debug!(path = %path.display(), values = values.len(), "Loaded value map");
    Ok(values)
}

/// Parse a flat TOML table of scalars
pub fn parse_values(content: &str) -> Result<ValueMap> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|e| TronlabError::ValueMapInvalid(e.to_string()))?;

    table
        .iter()
        .map(|(name, value)| Ok((name.clone(), stringify_toml(value, name)?)))
        .collect()
}

fn parse_json(content: &str) -> Result<ValueMap> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| TronlabError::ValueMapInvalid(e.to_string()))?;

    let serde_json::Value::Object(object) = value else {
        return Err(TronlabError::ValueMapInvalid(
            "top-level JSON value must be an object".to_string(),
        ));
    };

    object
        .iter()
        .map(|(name, value)| Ok((name.clone(), stringify_json(value, name)?)))
        .collect()
}

fn stringify_toml(value: &toml::Value, name: &str) -> Result<String> {
    use toml::Value;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) => Err(unsupported(name, "array")),
        Value::Table(_) => Err(unsupported(name, "table")),
    }
}

fn stringify_json(value: &serde_json::Value, name: &str) -> Result<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(unsupported(name, "null")),
        Value::Array(_) => Err(unsupported(name, "array")),
        Value::Object(_) => Err(unsupported(name, "object")),
    }
}

fn unsupported(name: &str, found: &str) -> TronlabError {
    TronlabError::ValueMapUnsupportedType {
        name: name.to_string(),
        found: found.to_string(),
    }
}

/// Parse a `NAME=VALUE` command-line assignment
///
/// Splits at the first `=`; the value may be empty or contain `=`.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    let (name, value) = input.split_once('=').ok_or_else(|| {
        TronlabError::ValueMapInvalid(format!("expected NAME=VALUE, got '{}'", input))
    })?;

    if name.is_empty() {
        return Err(TronlabError::ValueMapInvalid(format!(
            "missing placeholder name in '{}'",
            input
        )));
    }

    Ok((name.to_string(), value.to_string()))
}
