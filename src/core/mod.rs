//! Core business logic for Scribe.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and per-record conversion
//! - [`render`] - Markdown rendering of blocks and front matter
//!
//! # Export Workflow
//!
//! 1. **Query**: Fetch every record whose publish checkbox is ticked
//! 2. **Fan out**: Convert each record in its own task
//! 3. **Render**: Front matter from properties, body from content blocks
//! 4. **Write**: One file per record, overwriting previous exports
//! 5. **Report**: Join all tasks and build the export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe::adapters::notion::NotionClient;
//! use scribe::config::load_config;
//! use scribe::core::export::Exporter;
//! use scribe::domain::DatabaseId;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("scribe.toml")?;
//! let client = Arc::new(NotionClient::new(&config.notion)?);
//! let database_id = DatabaseId::new(config.notion.database_id.clone())?;
//!
//! let exporter = Exporter::new(client, database_id, config.export.clone());
//! let summary = exporter.run().await?;
//!
//! println!("Written: {}", summary.written);
//! println!("Failed: {}", summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod render;
