//! Test utilities for tronlab
//!
//! This crate provides shared testing utilities used across the tronlab workspace.

pub mod fixtures;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so every test's scratch files end
/// up in one gitignored place.
///
/// # Panics
///
/// Panics if the current directory is unavailable or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use tronlab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.tron");
/// std::fs::write(&file_path, "@[name]@").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `content` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create template directory");
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}
