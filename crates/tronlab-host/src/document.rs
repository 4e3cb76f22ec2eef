//! Text buffers as the host sees them

use serde::{Deserialize, Serialize};
use std::path::Path;
use tronlab_core::config::consts::{TEMPLATE_EXTENSIONS, TEMPLATE_LANGUAGE_ID};
use tronlab_core::{Result, TronlabError};

/// An identified, versioned text buffer
///
/// The engine only reads `text`; only the host bumps `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, usually a path or URI
    pub id: String,
    pub version: i32,
    /// Content-kind tag; only `tron` buffers are analyzed
    pub language_id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: 0,
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    /// Build a document from raw bytes
    ///
    /// Invalid UTF-8 yields an empty text: such input has no placeholders and
    /// no diagnostics.
    pub fn from_bytes(id: impl Into<String>, language_id: impl Into<String>, bytes: &[u8]) -> Self {
        let id = id.into();
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::warn!(document = %id, error = %e, "Document is not valid UTF-8, treating as empty");
                String::new()
            }
        };
        Self::new(id, language_id, text)
    }

    /// Read a document from disk, tagging it by extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| TronlabError::DocumentReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let language_id = if has_template_extension(path) {
            TEMPLATE_LANGUAGE_ID
        } else {
            "plaintext"
        };

        Ok(Self::from_bytes(
            path.display().to_string(),
            language_id,
            &bytes,
        ))
    }

    /// Whether the engine should process this document
    pub fn is_template(&self) -> bool {
        self.language_id == TEMPLATE_LANGUAGE_ID || has_template_extension(Path::new(&self.id))
    }

    /// Replace the text and bump the version
    pub fn update(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.version += 1;
    }

    /// Number of `\n`-separated lines
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }
}

fn has_template_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}
