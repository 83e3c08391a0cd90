// Scribe - Notion database to Markdown exporter
// Copyright (c) 2025 Scribe Contributors
// Licensed under the MIT License

use clap::Parser;
use scribe::cli::export::{EXIT_CONFIG, EXIT_FATAL};
use scribe::cli::Cli;
use scribe::logging::init_logging;
use std::process;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            process::exit(EXIT_CONFIG);
        }
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = match init_logging(cli.effective_log_level(&config), &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Scribe - Notion to Markdown exporter"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create SIGTERM handler");
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT (Ctrl+C), cancelling remaining pages...");
                    let _ = shutdown_tx.send(true);
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, cancelling remaining pages...");
                    let _ = shutdown_tx.send(true);
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            } else {
                tracing::info!("Received SIGINT (Ctrl+C), cancelling remaining pages...");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let exit_code = match cli.execute(config, shutdown_rx).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Export execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    drop(_log_guard);
    process::exit(exit_code);
}
