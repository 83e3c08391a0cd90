//! Configuration management for Scribe.
//!
//! Scribe reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `SCRIBE_<SECTION>_<KEY>` environment overrides
//! - Validation of each section
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`NotionConfig`] - API token, endpoint, database id, page size
//! - [`ExportConfig`] - Output directory, concurrency, pagination, failure policy
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [notion]
//! api_key = "${NOTION_KEY}"
//! database_id = "8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a"
//!
//! [export]
//! output_dir = "src/content/blog"
//! max_concurrency = 8
//! failure_policy = "isolate"
//! ```
//!
//! The API key may also come straight from the `NOTION_KEY` environment
//! variable, so the file is optional:
//!
//! ```bash
//! export NOTION_KEY="secret_..."
//! scribe --db 8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a --folder ./posts
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_or_default, NOTION_KEY_ENV};
pub use schema::{
    ApplicationConfig, ExportConfig, FailurePolicy, LoggingConfig, NotionConfig, ScribeConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
