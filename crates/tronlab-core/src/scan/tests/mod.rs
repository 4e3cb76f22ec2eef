//! Tests for the placeholder scanner
//!
//! Organized into focused submodules.

use super::*;


// Structural checks
mod structure;

// Occurrence positions and identity
mod occurrences;
