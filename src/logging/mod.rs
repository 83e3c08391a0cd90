//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - human-readable console output on stderr
//! - optional JSON file output with rotation
//! - `RUST_LOG` / log-level configuration
//!
//! # Example
//!
//! ```no_run
//! use scribe::logging::init_logging;
//! use scribe::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a record conversion
///
/// # Example
///
/// ```no_run
/// use scribe::log_record_start;
/// use scribe::domain::ids::RecordId;
///
/// let record_id = RecordId::new("abc123").unwrap();
/// log_record_start!(&record_id);
/// ```
#[macro_export]
macro_rules! log_record_start {
    ($record_id:expr) => {
        tracing::info!(record_id = %$record_id, "Starting converting page");
    };
}

/// Log the completion of a record conversion
///
/// # Example
///
/// ```no_run
/// use scribe::log_record_complete;
/// use scribe::domain::ids::RecordId;
///
/// let record_id = RecordId::new("abc123").unwrap();
/// log_record_complete!(&record_id, "abc123_my-post.md", 12);
/// ```
#[macro_export]
macro_rules! log_record_complete {
    ($record_id:expr, $file:expr, $blocks:expr) => {
        tracing::info!(
            record_id = %$record_id,
            file = %$file,
            blocks = $blocks,
            "Done converting page"
        );
    };
}

/// Log a record error with context
///
/// # Example
///
/// ```no_run
/// use scribe::log_error_with_context;
/// use scribe::domain::ids::RecordId;
/// use scribe::domain::NotionError;
///
/// let record_id = RecordId::new("abc123").unwrap();
/// let error = NotionError::NotFound("abc123".to_string());
/// log_error_with_context!(&record_id, &error, "Failed converting page");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($record_id:expr, $error:expr, $context:expr) => {
        tracing::error!(
            record_id = %$record_id,
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
