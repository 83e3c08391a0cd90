// Scribe - Notion database to Markdown exporter
// Copyright (c) 2025 Scribe Contributors
// Licensed under the MIT License

//! # Scribe - Notion to Markdown export
//!
//! Scribe exports the published pages of a Notion database as Markdown
//! files with front matter, ready for a static site generator.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Querying** a Notion database for pages whose publish checkbox is ticked
//! - **Fetching** each page's content blocks through the Notion REST API
//! - **Rendering** headings, paragraphs, code blocks and bullet lists as Markdown
//! - **Writing** one file per page, concurrently, with a per-run summary
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and exit codes
//! - [`core`] - Business logic (export orchestration, rendering)
//! - [`adapters`] - External integrations (Notion)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scribe::adapters::notion::NotionClient;
//! use scribe::config::load_config_or_default;
//! use scribe::core::export::Exporter;
//! use scribe::domain::DatabaseId;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("scribe.toml")?;
//!     let client = Arc::new(NotionClient::new(&config.notion)?);
//!     let database_id = DatabaseId::new("8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a")?;
//!
//!     let summary = Exporter::new(client, database_id, config.export.clone())
//!         .run()
//!         .await?;
//!
//!     println!("Exported {} pages", summary.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering
//!
//! Blocks render without any I/O, so the renderer can be used on its own:
//!
//! ```rust
//! use scribe::core::render::render_blocks;
//! use scribe::domain::{Block, HeadingLevel, TextSpan};
//!
//! let blocks = vec![
//!     Block::Heading { level: HeadingLevel::Two, spans: vec![TextSpan::plain("Setup")] },
//!     Block::Paragraph(vec![TextSpan::plain("Run "), TextSpan::code("cargo build")]),
//! ];
//! assert_eq!(render_blocks(&blocks), "## Setup\nRun `cargo build`\n");
//! ```
//!
//! ## Error Handling
//!
//! Scribe uses the [`domain::ScribeError`] type for all library errors and
//! `anyhow` only at the binary boundary.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
