//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch an already-parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start { config, port } => start(config.as_deref(), port),
    }
}

/// Load configuration and serve until interrupted
pub fn start(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
    }

    Logger::info("CONFIG_LOADED", &[("addr", &config.socket_addr())]);

    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::server(format!("failed to build runtime: {e}")))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server(e.to_string()))
}

/// Load configuration from a JSON file
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("failed to read config: {e}")))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config(format!("invalid config JSON: {e}")))
}
