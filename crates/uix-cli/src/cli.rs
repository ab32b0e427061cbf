//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// UI exports - Aggregate plugin exports and query the result
#[derive(Parser, Debug)]
#[command(name = "uix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./uix.toml when present)
    #[arg(short, long, global = true, env = "UIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra plugin scan directory (repeatable)
    #[arg(short = 'p', long = "plugin-dir", global = true)]
    pub plugin_dirs: Vec<PathBuf>,

    /// Override the URL base path prepended to navigation links
    #[arg(long, global = true)]
    pub base_path: Option<String>,

    /// Skip unknown export types instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Register every discovered plugin and report what was aggregated
    Check,

    /// List registered applications (visible first, then hidden)
    Apps {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List navigation links sorted by order
    Links {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Find alias specs by category glob
    ///
    /// Examples:
    ///   uix find visTypes
    ///   uix find 'vis*' docViews
    Find {
        /// Glob patterns matched against alias category names
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List bundle providers in registration order
    Bundles {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
