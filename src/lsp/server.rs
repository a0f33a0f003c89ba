//! Standalone console host.
//!
//! Hosts the shim outside an editor: configuration comes from a JSON file,
//! the command-dispatch facility is lines read from stdin, and the
//! notification surface is stdout. Everything runs on one cooperative
//! event loop, so lifecycle triggers are serialized by construction.

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::host::{ConsoleNotifier, HostCommand};
use crate::lsp::connection::ProcessLauncher;
use crate::lsp::lifecycle::LifecycleController;

fn init_logging() -> anyhow::Result<WorkerGuard> {
    let data_dir = config::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = tracing_appender::rolling::never(&data_dir, config::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Run the console host until `quit` or stdin EOF.
///
/// Activation failures do not terminate the loop: with no retry policy,
/// recovery from a server that fails to start is a manual `restart`.
pub async fn run_host(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let _guard = init_logging()?;

    let config_path = config_path.unwrap_or_else(config::config_path);
    let config = config::load_config(&config_path)?;
    info!(
        "Loaded configuration from {:?}: server = {:?}",
        config_path, config.language_server_path
    );

    let mut controller = LifecycleController::new(
        config.language_server_path,
        ProcessLauncher,
        ConsoleNotifier,
    );

    if let Err(e) = controller.activate() {
        error!("Failed to start language server: {:#}", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<HostCommand>() {
            Ok(HostCommand::RestartServer) => {
                if let Err(e) = controller.restart().await {
                    error!("Failed to restart language server: {:#}", e);
                }
            }
            Ok(HostCommand::ShutdownServer) => controller.shutdown().await,
            Ok(HostCommand::Quit) => break,
            Err(_) => warn!("Unknown command: {}", line),
        }
    }

    controller.dispose();
    info!("Host loop exited");
    Ok(())
}
