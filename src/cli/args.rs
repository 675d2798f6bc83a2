//! CLI argument definitions using clap
//!
//! Commands:
//! - exocatalog serve [--config <path>] [--host <host>] [--port <port>] [--log-level <level>]
//! - exocatalog config [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::Severity;

/// exocatalog - An in-memory exoplanet catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "exocatalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerArgs),

    /// Print the effective configuration as JSON and exit
    Config(ServerArgs),
}

/// Configuration sources shared by every command.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Minimum log level (trace, info, warn, error)
    #[arg(long)]
    pub log_level: Option<Severity>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
