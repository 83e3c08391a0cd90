//! Domain models and types for Scribe.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DatabaseId`], [`RecordId`])
//! - **Domain models** ([`Record`], [`PropertyValue`], [`Block`], [`TextSpan`])
//! - **Error types** ([`ScribeError`], [`NotionError`])
//! - **Result type alias** ([`Result`])
//!
//! These types are independent of the Notion wire format; the
//! [`adapters::notion`](crate::adapters::notion) module converts API
//! responses into them.

pub mod block;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

pub use block::{Block, HeadingLevel};
pub use errors::{NotionError, ScribeError};
pub use ids::{DatabaseId, RecordId};
pub use record::{PropertyValue, Record, RecordBuilder, TextSpan};
pub use result::Result;
