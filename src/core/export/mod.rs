//! Export orchestration
//!
//! This module provides the core export logic for Scribe, including:
//! - Concurrent conversion of published records
//! - Per-record conversion into Markdown files
//! - Summary and reporting

pub mod converter;
pub mod coordinator;
pub mod summary;

pub use converter::{PreparedDocument, RecordConverter};
pub use coordinator::Exporter;
pub use summary::{ExportSummary, RecordFailure};
