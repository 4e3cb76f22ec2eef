//! Per-document diagnostic store

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tronlab_core::Diagnostic;

/// Current diagnostics per document id
///
/// Cloning yields another handle to the same store. Every update replaces a
/// document's set wholesale.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticStore {
    inner: Arc<Mutex<HashMap<String, Vec<Diagnostic>>>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Diagnostic>>> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the set for `id`, returning the previous one
    pub fn replace(&self, id: &str, diagnostics: Vec<Diagnostic>) -> Option<Vec<Diagnostic>> {
        self.lock().insert(id.to_string(), diagnostics)
    }

    pub fn get(&self, id: &str) -> Option<Vec<Diagnostic>> {
        self.lock().get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Vec<Diagnostic>> {
        self.lock().remove(id)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of documents with a stored set
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
