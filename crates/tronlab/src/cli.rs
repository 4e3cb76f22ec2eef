//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tronlab")]
#[command(version, about = "Analyze, validate and render Tron templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to tron.toml (default: nearest one from the current directory up)
    #[arg(long, global = true, env = "TRON_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub validation: ValidationArgs,
}

/// Overrides for the `[validation]` section
#[derive(Args, Debug, Clone, Default)]
pub struct ValidationArgs {
    /// Minimum placeholder name length
    #[arg(long, global = true, value_name = "N")]
    pub min_length: Option<usize>,

    /// Report trailing whitespace
    #[arg(long, global = true)]
    pub trailing_whitespace: bool,

    /// Turn validation off entirely
    #[arg(long, global = true)]
    pub no_validation: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate templates and report diagnostics
    Validate {
        /// Template files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long)]
        json: bool,

        /// Exit with code 1 when any error is reported
        #[arg(long)]
        strict: bool,
    },

    /// Show placeholders, template type and sample values
    Analyze {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Substitute placeholder values
    Render {
        file: PathBuf,

        /// Value for one placeholder (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// TOML or JSON file of values
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,

        /// Start from the inferred sample values
        #[arg(long)]
        samples: bool,

        /// Write output here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Preview a template rendered with sample values
    Preview {
        file: PathBuf,

        /// Override one sample value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print a built-in template snippet
    Snippet {
        /// Snippet keyword: fn, struct, impl or mod
        #[arg(required_unless_present = "list")]
        kind: Option<String>,

        /// List available snippets
        #[arg(long)]
        list: bool,
    },

    /// Revalidate a template whenever it changes
    Watch {
        file: PathBuf,

        /// Also print the rendered preview after each pass
        #[arg(long)]
        preview: bool,
    },
}
