//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Scribe using clap.
//! There are no subcommands: every invocation runs one export.

pub mod export;

use crate::config::{load_config, load_config_or_default, FailurePolicy, ScribeConfig};
use crate::domain::Result;
use clap::Parser;

/// Default configuration file, optional when not given explicitly
pub const DEFAULT_CONFIG_PATH: &str = "scribe.toml";

/// Scribe - Notion database to Markdown exporter
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(version, about, long_about = None)]
#[command(author = "Scribe Contributors")]
pub struct Cli {
    /// Id of the database holding the pages to export
    #[arg(long)]
    pub db: Option<String>,

    /// Folder the Markdown files are written to
    #[arg(long)]
    pub folder: Option<String>,

    /// Path to configuration file (defaults to scribe.toml when present)
    #[arg(short, long, env = "SCRIBE_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SCRIBE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Maximum number of pages converted at once (0 = unbounded)
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Only export the first page of blocks of each page
    #[arg(long)]
    pub first_page_only: bool,

    /// Stop the whole export at the first page that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Render every page but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Load configuration from the selected file
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load_config(&self) -> Result<ScribeConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => load_config_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Log level from the command line, falling back to the configuration
    pub fn effective_log_level<'a>(&'a self, config: &'a ScribeConfig) -> &'a str {
        self.log_level
            .as_deref()
            .unwrap_or(&config.application.log_level)
    }

    /// Apply command-line flags on top of file and environment settings
    pub fn apply_overrides(&self, config: &mut ScribeConfig) {
        if let Some(db) = &self.db {
            tracing::info!(database_id = %db, "Overriding database id from CLI");
            config.notion.database_id = db.clone();
        }

        if let Some(folder) = &self.folder {
            tracing::info!(output_dir = %folder, "Overriding output folder from CLI");
            config.export.output_dir = folder.clone();
        }

        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }

        if let Some(max) = self.max_concurrency {
            config.export.max_concurrency = max;
        }

        if self.first_page_only {
            config.export.follow_pagination = false;
        }

        if self.fail_fast {
            config.export.failure_policy = FailurePolicy::Abort;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }
}
