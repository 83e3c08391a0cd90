//! Notion adapter implementation
//!
//! Provides the [`NotionStore`] abstraction the exporter depends on, the
//! HTTP [`NotionClient`] implementing it, and the API wire models.

pub mod client;
pub mod models;
pub mod store;

pub use client::NotionClient;
pub use store::{fetch_blocks, query_all, NotionStore, Paginated, QueryFilter};
