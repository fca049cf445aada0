//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Monitor sync client
///
/// Push local monitor definitions to the monitoring service and list what
/// it knows about.
#[derive(Parser, Debug)]
#[command(name = "monsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONSYNC_CONFIG")]
    pub config: Option<String>,

    /// API key for the monitoring service
    #[arg(long, global = true, env = "MONSYNC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API host base URL
    #[arg(long, global = true, env = "MONSYNC_API_HOST")]
    pub api_host: Option<String>,

    /// Use the development API host
    #[arg(long, global = true)]
    pub dev: bool,

    /// Dry run mode - don't send anything to the service
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every monitor known to the service
    List,

    /// Create or update monitors from a declaration file
    Sync(SyncArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// JSON file holding an array of monitors
    pub file: String,

    /// Let the service register unknown monitors as newly discovered
    #[arg(long)]
    pub auto_discover: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
