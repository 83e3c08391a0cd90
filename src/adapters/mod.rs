//! External system adapters for Scribe.
//!
//! # Modules
//!
//! - [`notion`] - Notion REST API integration (database query, block listing)
//!
//! The exporter only talks to the [`notion::NotionStore`] trait, so tests can
//! substitute an in-memory store:
//!
//! ```rust,no_run
//! use scribe::adapters::notion::{query_all, NotionClient, QueryFilter};
//! use scribe::config::load_config_or_default;
//! use scribe::domain::DatabaseId;
//!
//! # async fn example() -> scribe::domain::Result<()> {
//! let config = load_config_or_default("scribe.toml")?;
//! let client = NotionClient::new(&config.notion)?;
//! let db = DatabaseId::new("8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a").map_err(scribe::domain::ScribeError::Validation)?;
//!
//! let records = query_all(&client, &db, &QueryFilter::checked("Publish")).await?;
//! println!("{} published pages", records.len());
//! # Ok(())
//! # }
//! ```

pub mod notion;
