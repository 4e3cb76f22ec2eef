//! Analysis engine for Tron templates.
//!
//! A Tron template is plain text with `@[name]@` placeholders. This crate
//! scans templates, reports malformed or suspicious constructs, classifies
//! them, infers sample values and renders them with a value map.
//!
//! Every entry point is a pure function of its inputs: nothing is cached and
//! no state is shared between calls.

// Core modules
pub mod analysis;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod position;
pub mod render;
pub mod scan;
pub mod validate;

// Re-export commonly used types
pub use analysis::{TemplateAnalysis, TemplateType, analyze};
pub use config::{Config, ValidationConfig};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use error::{Result, TronlabError};
pub use position::{Position, Span};
pub use render::{ValueMap, render};
pub use scan::{Occurrence, ScanResult, scan};
pub use validate::validate;
