//! CLI command implementations

use std::io::{self, Write};

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;

use super::args::{Command, ServerArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Config(args) => show_config(&args),
    }
}

/// Resolve the effective configuration: file (or defaults), then flags.
pub fn resolve_config(args: &ServerArgs) -> CliResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it shuts down.
///
/// The store lives exactly as long as this call.
pub fn serve(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    Logger::set_min_severity(config.log_level);

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration
pub fn show_config(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
