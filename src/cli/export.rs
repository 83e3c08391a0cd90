//! Export execution
//!
//! Wires configuration, the Notion client and the exporter together and
//! maps the outcome to a process exit code.

use super::Cli;
use crate::adapters::notion::NotionClient;
use crate::config::ScribeConfig;
use crate::core::export::{ExportSummary, Exporter};
use crate::domain::ids::DatabaseId;
use crate::domain::ScribeError;
use std::sync::Arc;
use tokio::sync::watch;

/// Every record exported
pub const EXIT_SUCCESS: i32 = 0;
/// Some records failed under the isolate policy
pub const EXIT_PARTIAL: i32 = 1;
/// Invalid or incomplete configuration
pub const EXIT_CONFIG: i32 = 2;
/// The database query failed
pub const EXIT_QUERY: i32 = 4;
/// Aborted run or unexpected error
pub const EXIT_FATAL: i32 = 5;
/// Stopped by SIGINT/SIGTERM
pub const EXIT_INTERRUPTED: i32 = 130;

impl Cli {
    /// Run the export and return the process exit code
    pub async fn execute(
        &self,
        mut config: ScribeConfig,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        self.apply_overrides(&mut config);

        let database_id = config
            .validate()
            .and_then(|_| config.validate_for_export())
            .and_then(|_| DatabaseId::new(config.notion.database_id.clone()))
            .map_err(ScribeError::Validation);
        let database_id = match database_id {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("Configuration validation failed: {e}");
                return Ok(exit_code_for_error(&e));
            }
        };

        let client = match NotionClient::new(&config.notion) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Notion client");
                eprintln!("Failed to initialize export: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if config.export.dry_run {
            tracing::info!("Dry run mode enabled - no files will be written");
            println!("DRY RUN MODE - No files will be written");
            println!();
        }

        let exporter = Exporter::new(Arc::new(client), database_id, config.export.clone())
            .with_shutdown(shutdown_signal);

        let summary = match exporter.run().await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(exit_code_for_error(&e));
            }
        };

        print_summary(&summary);
        Ok(exit_code_for_summary(&summary))
    }
}

/// Exit code for a run that returned an error
pub fn exit_code_for_error(error: &ScribeError) -> i32 {
    match error {
        ScribeError::Configuration(_) | ScribeError::Validation(_) => EXIT_CONFIG,
        ScribeError::Notion(_) => EXIT_QUERY,
        _ => EXIT_FATAL,
    }
}

/// Exit code for a run that completed
pub fn exit_code_for_summary(summary: &ExportSummary) -> i32 {
    if summary.interrupted {
        EXIT_INTERRUPTED
    } else if summary.failed > 0 {
        EXIT_PARTIAL
    } else {
        EXIT_SUCCESS
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("Export Summary:");
    println!("  Total Pages: {}", summary.total_records);
    if summary.dry_run {
        println!("  Would Write: {}", summary.written);
    } else {
        println!("  Written: {}", summary.written);
    }
    println!("  Failed: {}", summary.failed);
    if summary.cancelled > 0 {
        println!("  Cancelled: {}", summary.cancelled);
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if summary.dry_run && !summary.files.is_empty() {
        println!("Files:");
        for file in &summary.files {
            println!("  - {}", file.display());
        }
        println!();
    }

    if !summary.errors.is_empty() {
        println!("Errors encountered:");
        for failure in &summary.errors {
            println!("  - {}: {}", failure.record_id, failure.message);
        }
        println!();
    }

    if summary.interrupted {
        println!("Export interrupted. Run the same command to export the remaining pages.");
    } else if summary.is_successful() {
        println!("Export completed successfully!");
    } else {
        println!("Export completed with failures");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::RecordFailure;
    use crate::domain::ids::RecordId;
    use crate::domain::NotionError;
    use clap::Parser;

    #[test]
    fn test_exit_code_for_error() {
        assert_eq!(
            exit_code_for_error(&ScribeError::Configuration("x".to_string())),
            EXIT_CONFIG
        );
        assert_eq!(
            exit_code_for_error(&ScribeError::Validation("x".to_string())),
            EXIT_CONFIG
        );
        assert_eq!(
            exit_code_for_error(&NotionError::NotFound("db".to_string()).into()),
            EXIT_QUERY
        );
        assert_eq!(
            exit_code_for_error(&ScribeError::Export("aborted".to_string())),
            EXIT_FATAL
        );
        assert_eq!(
            exit_code_for_error(&ScribeError::Io("disk full".to_string())),
            EXIT_FATAL
        );
    }

    #[test]
    fn test_exit_code_for_summary() {
        let mut summary = ExportSummary::default();
        assert_eq!(exit_code_for_summary(&summary), EXIT_SUCCESS);

        summary.add_failure(RecordFailure::new(RecordId::new("a").unwrap(), "boom"));
        assert_eq!(exit_code_for_summary(&summary), EXIT_PARTIAL);

        summary.interrupted = true;
        assert_eq!(exit_code_for_summary(&summary), EXIT_INTERRUPTED);
    }

    #[tokio::test]
    async fn test_missing_database_id_is_config_error() {
        let cli = Cli::parse_from(["scribe"]);
        let (_tx, rx) = watch::channel(false);

        let code = cli.execute(ScribeConfig::default(), rx).await.unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let cli = Cli::parse_from(["scribe", "--db", "abc123"]);
        let (_tx, rx) = watch::channel(false);

        let code = cli.execute(ScribeConfig::default(), rx).await.unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }
}
