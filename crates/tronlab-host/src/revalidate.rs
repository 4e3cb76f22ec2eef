//! Debounced revalidation
//!
//! Each edit restarts a per-document quiet timer. When the timer fires the
//! document is validated from scratch and its stored set is replaced. A
//! newer edit cancels the pending pass, so only the last edit in a burst is
//! ever validated.

use crate::document::Document;
use crate::store::DiagnosticStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tronlab_core::{Diagnostic, ValidationConfig, validate};

/// Published after every completed validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEvent {
    pub document_id: String,
    pub version: i32,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    token: CancellationToken,
}

#[derive(Debug, Default)]
struct PendingTable {
    next_generation: u64,
    entries: HashMap<String, Pending>,
}

/// Schedules validation passes and writes their results to a store
#[derive(Debug, Clone)]
pub struct Revalidator {
    store: DiagnosticStore,
    config: ValidationConfig,
    debounce: Duration,
    pending: Arc<Mutex<PendingTable>>,
    events: Option<UnboundedSender<ValidationEvent>>,
}

impl Revalidator {
    pub fn new(store: DiagnosticStore, config: ValidationConfig, debounce: Duration) -> Self {
        Self {
            store,
            config,
            debounce,
            pending: Arc::new(Mutex::new(PendingTable::default())),
            events: None,
        }
    }

    /// Publish a [`ValidationEvent`] after each pass
    pub fn with_events(mut self, events: UnboundedSender<ValidationEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn store(&self) -> &DiagnosticStore {
        &self.store
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, PendingTable> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Validate `document` once it has been quiet for the debounce period
    ///
    /// Cancels any pass already pending for the same document. Must be called
    /// from within a Tokio runtime.
    pub fn schedule(&self, document: &Document) {
        if !document.is_template() {
            tracing::debug!(document = %document.id, "Skipping non-template document");
            return;
        }

        let token = CancellationToken::new();
        let generation = {
            let mut table = self.lock();
            table.next_generation += 1;
            let generation = table.next_generation;
            let previous = table.entries.insert(
                document.id.clone(),
                Pending {
                    generation,
                    token: token.clone(),
                },
            );
            if let Some(previous) = previous {
                previous.token.cancel();
            }
            generation
        };

        let this = self.clone();
        let id = document.id.clone();
        let version = document.version;
        let text = document.text.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(document = %id, version, "Pending validation superseded");
                }
                _ = tokio::time::sleep(debounce) => {
                    let diagnostics = validate(&text, &this.config);
                    this.finish(&id, version, generation, diagnostics);
                }
            }
        });
    }

    /// Store results unless a newer pass was scheduled meanwhile
    fn finish(&self, id: &str, version: i32, generation: u64, diagnostics: Vec<Diagnostic>) {
        {
            let mut table = self.lock();
            let current = table.entries.get(id).map(|pending| pending.generation);
            if current != Some(generation) {
                return;
            }
            table.entries.remove(id);
            // Still under the table lock: a concurrent cancel waits for this
            self.store.replace(id, diagnostics.clone());
        }
        self.publish(id, version, diagnostics);
    }

    /// Validate `document` now, cancelling any pending pass
    ///
    /// Non-template documents are ignored and yield an empty list.
    pub fn flush(&self, document: &Document) -> Vec<Diagnostic> {
        if !document.is_template() {
            return Vec::new();
        }

        self.cancel(&document.id);
        let diagnostics = validate(&document.text, &self.config);
        self.store.replace(&document.id, diagnostics.clone());
        self.publish(&document.id, document.version, diagnostics.clone());
        diagnostics
    }

    /// Cancel the pending pass for `id`, if any
    pub fn cancel(&self, id: &str) -> bool {
        match self.lock().entries.remove(id) {
            Some(pending) => {
                pending.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel the pending pass and drop the stored set
    pub fn forget(&self, id: &str) {
        self.cancel(id);
        self.store.remove(id);
    }

    /// Number of documents waiting for a debounced pass
    pub fn pending_count(&self) -> usize {
        self.lock().entries.len()
    }

    fn publish(&self, id: &str, version: i32, diagnostics: Vec<Diagnostic>) {
        tracing::debug!(
            document = %id,
            version,
            diagnostics = diagnostics.len(),
            "Validated document"
        );

        if let Some(events) = &self.events {
            let event = ValidationEvent {
                document_id: id.to_string(),
                version,
                diagnostics,
            };
            // Receiver gone means nobody is listening any more
            let _ = events.send(event);
        }
    }
}
