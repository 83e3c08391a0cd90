//! Exporter - main orchestrator for the export process
//!
//! Queries the database for published records, then converts every record
//! in its own task. All tasks are joined before the run returns, so each
//! record ends up written, failed or cancelled in the summary.

use crate::adapters::notion::{query_all, NotionStore, QueryFilter};
use crate::config::{ExportConfig, FailurePolicy};
use crate::core::export::converter::RecordConverter;
use crate::core::export::summary::{ExportSummary, RecordFailure};
use crate::domain::ids::{DatabaseId, RecordId};
use crate::domain::{Result, ScribeError};
use crate::log_error_with_context;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{watch, Semaphore};

/// Result of one record task
#[derive(Debug)]
enum RecordOutcome {
    Written(PathBuf),
    Failed(ScribeError),
    Cancelled,
}

/// Exports every published record of a database
pub struct Exporter {
    store: Arc<dyn NotionStore>,
    database_id: DatabaseId,
    config: ExportConfig,
    shutdown_signal: watch::Receiver<bool>,
}

impl Exporter {
    /// Create an exporter that runs until every record is converted
    pub fn new(store: Arc<dyn NotionStore>, database_id: DatabaseId, config: ExportConfig) -> Self {
        let (_tx, shutdown_signal) = watch::channel(false);
        Self {
            store,
            database_id,
            config,
            shutdown_signal,
        }
    }

    /// Stop starting new conversions once `shutdown_signal` turns true
    pub fn with_shutdown(mut self, shutdown_signal: watch::Receiver<bool>) -> Self {
        self.shutdown_signal = shutdown_signal;
        self
    }

    /// Execute the export
    ///
    /// 1. Queries every page of records whose publish checkbox is ticked
    /// 2. Creates the output directory
    /// 3. Spawns one conversion task per record, gated by `max_concurrency`
    /// 4. Waits for all tasks and builds the summary
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the directory creation fails. With
    /// [`FailurePolicy::Abort`], or when a record fails with a fatal error,
    /// the remaining tasks are cancelled and an export error naming the
    /// record whose failure stopped the run is returned. A write that has
    /// already started is allowed to finish.
    /// Files written before that point are left in place.
    pub async fn run(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(self.config.dry_run);

        tracing::info!(
            database_id = %self.database_id,
            output_dir = %self.config.output_dir,
            "Starting converting pages"
        );

        let filter = QueryFilter::checked(&self.config.publish_property);
        let records = query_all(self.store.as_ref(), &self.database_id, &filter).await?;
        summary.total_records = records.len();

        tracing::info!(count = records.len(), "Found published pages");

        if !self.config.dry_run {
            tokio::fs::create_dir_all(&self.config.output_dir)
                .await
                .map_err(|e| {
                    ScribeError::Io(format!(
                        "Failed to create output directory {}: {e}",
                        self.config.output_dir
                    ))
                })?;
        }

        let converter = Arc::new(RecordConverter::new(self.store.clone(), &self.config));
        let gate = match self.config.max_concurrency {
            0 => None,
            permits => Some(Arc::new(Semaphore::new(permits))),
        };
        let abort_on_failure = self.config.failure_policy == FailurePolicy::Abort;
        // Holds the id of the record whose failure stopped the run
        let (abort_tx, abort_rx) = watch::channel::<Option<RecordId>>(None);
        let abort_tx = Arc::new(abort_tx);

        let mut ids: Vec<RecordId> = Vec::with_capacity(records.len());
        let mut handles = Vec::with_capacity(records.len());

        for record in records {
            ids.push(record.id.clone());

            let converter = Arc::clone(&converter);
            let gate = gate.clone();
            let shutdown = self.shutdown_signal.clone();
            let abort_rx = abort_rx.clone();
            let abort_tx = Arc::clone(&abort_tx);

            handles.push(tokio::spawn(async move {
                let _permit = match gate {
                    Some(semaphore) => match semaphore.acquire_owned().await {
                        Ok(permit) => Some(permit),
                        Err(_) => return RecordOutcome::Cancelled,
                    },
                    None => None,
                };

                let prepared = tokio::select! {
                    biased;
                    _ = stop_requested(shutdown, abort_rx) => return RecordOutcome::Cancelled,
                    prepared = converter.prepare(&record) => prepared,
                };

                // A started write always runs to completion
                let result = match prepared {
                    Ok(prepared) => converter.write(prepared).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(path) => RecordOutcome::Written(path),
                    Err(e) => {
                        if abort_on_failure || e.is_fatal() {
                            abort_tx.send_if_modified(|trigger| {
                                if trigger.is_some() {
                                    return false;
                                }
                                *trigger = Some(record.id.clone());
                                true
                            });
                        }
                        RecordOutcome::Failed(e)
                    }
                }
            }));
        }

        let outcomes = join_all(handles).await;
        let trigger = abort_rx.borrow().clone();

        let mut abort_error: Option<(RecordId, String)> = None;
        for (record_id, joined) in ids.into_iter().zip(outcomes) {
            match joined {
                Ok(RecordOutcome::Written(path)) => summary.add_written(path),
                Ok(RecordOutcome::Failed(e)) => {
                    log_error_with_context!(record_id, e, "Failed converting page");
                    if trigger.as_ref() == Some(&record_id) {
                        abort_error = Some((record_id.clone(), e.to_string()));
                    }
                    summary.add_failure(RecordFailure::new(record_id, e.to_string()));
                }
                Ok(RecordOutcome::Cancelled) => summary.cancelled += 1,
                Err(join_error) => {
                    let message = if join_error.is_panic() {
                        "conversion task panicked".to_string()
                    } else {
                        format!("conversion task did not complete: {join_error}")
                    };
                    log_error_with_context!(record_id, message, "Failed converting page");
                    summary.add_failure(RecordFailure::new(record_id, message));
                }
            }
        }

        summary.interrupted = summary.cancelled > 0 && *self.shutdown_signal.borrow();
        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        if let Some((record_id, error)) = abort_error {
            tracing::error!(
                record_id = %record_id,
                cancelled = summary.cancelled,
                "Export aborted"
            );
            return Err(ScribeError::Export(format!(
                "Aborted after page {record_id} failed: {error}"
            )));
        }

        Ok(summary)
    }
}

/// Resolves once either the shutdown or the abort signal is raised
async fn stop_requested(
    shutdown: watch::Receiver<bool>,
    abort: watch::Receiver<Option<RecordId>>,
) {
    tokio::select! {
        _ = raised(shutdown, |set: &bool| *set) => {}
        _ = raised(abort, Option::is_some) => {}
    }
}

/// Resolves once the value satisfies `is_set`; never resolves if the sender is gone
async fn raised<T>(mut flag: watch::Receiver<T>, is_set: impl FnMut(&T) -> bool) {
    let closed = flag.wait_for(is_set).await.is_err();
    if closed {
        std::future::pending::<()>().await;
    }
}
