//! Constants shared by the engine and its hosts

/// Configuration file looked up from the working directory upwards
pub const CONFIG_FILE_NAME: &str = "tron.toml";

/// Language id of documents written in the template notation
pub const TEMPLATE_LANGUAGE_ID: &str = "tron";

/// File extensions recognised as templates
pub const TEMPLATE_EXTENSIONS: &[&str] = &["tron", "tpl"];

/// Validation defaults
pub mod validation {
    /// Shortest placeholder name accepted without a warning
    pub const MIN_PLACEHOLDER_LENGTH: usize = 2;
}

/// Watch/revalidation defaults
pub mod watch {
    /// Quiet period after the last edit before revalidating
    pub const DEBOUNCE_MS: u64 = 500;

    /// How often a watched file is polled for changes
    pub const POLL_INTERVAL_MS: u64 = 200;
}
