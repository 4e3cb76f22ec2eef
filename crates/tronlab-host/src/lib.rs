//! Host-side collaborators for the tronlab engine
//!
//! The engine in `tronlab-core` is pure. This crate owns the state around
//! it: open documents, the per-document diagnostic store, debounced
//! revalidation and editor-style completion.

pub mod completion;
pub mod document;
pub mod revalidate;
pub mod session;
pub mod store;

pub use completion::{CompletionItem, CompletionKind, KnownPlaceholder, Snippet, complete};
pub use document::Document;
pub use revalidate::{Revalidator, ValidationEvent};
pub use session::{Preview, Session};
pub use store::DiagnosticStore;
