//! tron.toml configuration

pub mod consts;
pub mod model;

pub use model::{Config, PreviewConfig, ValidationConfig, WatchConfig};
