//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::ids::RecordId;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of records returned by the database query
    pub total_records: usize,

    /// Number of files written (or that would be written in dry-run mode)
    pub written: usize,

    /// Number of records whose conversion failed
    pub failed: usize,

    /// Number of records skipped because the run was stopped
    pub cancelled: usize,

    /// Whether the run was a dry run
    pub dry_run: bool,

    /// Whether a shutdown signal stopped the run early
    pub interrupted: bool,

    /// Duration of the export
    pub duration: Duration,

    /// Output files, in record order
    pub files: Vec<PathBuf>,

    /// Per-record failures
    pub errors: Vec<RecordFailure>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(dry_run: bool) -> Self {
        Self {
            total_records: 0,
            written: 0,
            failed: 0,
            cancelled: 0,
            dry_run,
            interrupted: false,
            duration: Duration::from_secs(0),
            files: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a written file
    pub fn add_written(&mut self, path: PathBuf) {
        self.written += 1;
        self.files.push(path);
    }

    /// Record a failed conversion
    pub fn add_failure(&mut self, failure: RecordFailure) {
        self.failed += 1;
        self.errors.push(failure);
    }

    /// Check if every record was converted
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.cancelled == 0 && !self.interrupted
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 100.0;
        }
        (self.written as f64 / self.total_records as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_records = self.total_records,
            written = self.written,
            failed = self.failed,
            cancelled = self.cancelled,
            dry_run = self.dry_run,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Finished"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for failure in &self.errors {
                tracing::warn!(
                    record_id = %failure.record_id,
                    message = %failure.message,
                    "Record failed"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A record that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Record that failed
    pub record_id: RecordId,

    /// Error message
    pub message: String,
}

impl RecordFailure {
    /// Create a new record failure
    pub fn new(record_id: RecordId, message: impl Into<String>) -> Self {
        Self {
            record_id,
            message: message.into(),
        }
    }
}
