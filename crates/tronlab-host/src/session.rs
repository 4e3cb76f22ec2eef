//! Editor event routing

use crate::document::Document;
use crate::revalidate::{Revalidator, ValidationEvent};
use crate::store::DiagnosticStore;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tronlab_core::{Config, Diagnostic, TemplateAnalysis, ValueMap, analyze};

/// Preview payload for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub document_id: String,
    pub version: i32,
    pub analysis: TemplateAnalysis,
    /// Values actually used for rendering
    pub values: ValueMap,
    pub rendered: String,
}

/// Open documents plus their validation state
pub struct Session {
    config: Config,
    documents: HashMap<String, Document>,
    revalidator: Revalidator,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let revalidator = Revalidator::new(
            DiagnosticStore::new(),
            config.validation.clone(),
            Duration::from_millis(config.watch.debounce_ms),
        );
        Self {
            config,
            documents: HashMap::new(),
            revalidator,
        }
    }

    /// Publish a [`ValidationEvent`] after every pass
    pub fn with_events(mut self, events: UnboundedSender<ValidationEvent>) -> Self {
        self.revalidator = self.revalidator.with_events(events);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &DiagnosticStore {
        self.revalidator.store()
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Track `document` and validate it immediately
    pub fn did_open(&mut self, document: Document) -> Vec<Diagnostic> {
        tracing::debug!(document = %document.id, language = %document.language_id, "Opened document");
        let diagnostics = self.revalidator.flush(&document);
        self.documents.insert(document.id.clone(), document);
        diagnostics
    }

    /// Replace the text of an open document and schedule a debounced pass
    ///
    /// Returns the new version, or `None` if the document is not open.
    pub fn did_change(&mut self, id: &str, text: impl Into<String>) -> Option<i32> {
        let document = self.documents.get_mut(id)?;
        document.update(text);
        self.revalidator.schedule(document);
        Some(document.version)
    }

    /// Validate an open document now
    pub fn did_save(&mut self, id: &str) -> Option<Vec<Diagnostic>> {
        let document = self.documents.get(id)?;
        Some(self.revalidator.flush(document))
    }

    /// Stop tracking a document: its timer is cancelled and its set dropped
    pub fn did_close(&mut self, id: &str) -> Option<Document> {
        self.revalidator.forget(id);
        self.documents.remove(id)
    }

    /// Current diagnostics for `id`, empty if none are stored
    pub fn diagnostics(&self, id: &str) -> Vec<Diagnostic> {
        self.store().get(id).unwrap_or_default()
    }

    /// Analyze and render an open template
    ///
    /// Sample values are overlaid with `overrides`; an empty override keeps
    /// the sample. Returns `None` for unknown or non-template documents.
    pub fn preview(&self, id: &str, overrides: &ValueMap) -> Option<Preview> {
        let document = self.documents.get(id).filter(|doc| doc.is_template())?;
        let analysis = analyze(&document.text);
        let values = analysis.values_with(overrides);
        let rendered = tronlab_core::render(&document.text, &values);

        Some(Preview {
            document_id: document.id.clone(),
            version: document.version,
            analysis,
            values,
            rendered,
        })
    }
}
