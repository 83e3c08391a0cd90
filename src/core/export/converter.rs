//! Record converter
//!
//! Turns one record into one Markdown file: front matter from the record's
//! properties, body from its content blocks.

use crate::adapters::notion::{fetch_blocks, NotionStore};
use crate::config::ExportConfig;
use crate::core::render::{render_blocks, FrontMatter};
use crate::domain::{Block, Record, RecordId, Result, ScribeError};
use crate::{log_record_complete, log_record_start};
use std::path::PathBuf;
use std::sync::Arc;

/// Converts records into files in the output directory
#[derive(Clone)]
pub struct RecordConverter {
    store: Arc<dyn NotionStore>,
    output_dir: PathBuf,
    extension: String,
    follow_pagination: bool,
    dry_run: bool,
}

impl RecordConverter {
    /// Create a converter writing into `config.output_dir`
    pub fn new(store: Arc<dyn NotionStore>, config: &ExportConfig) -> Self {
        Self {
            store,
            output_dir: PathBuf::from(&config.output_dir),
            extension: config.file_extension.clone(),
            follow_pagination: config.follow_pagination,
            dry_run: config.dry_run,
        }
    }

    /// Build the file name and full document for a record and its blocks
    pub fn document(&self, record: &Record, blocks: &[Block]) -> (String, String) {
        let front = FrontMatter::extract(record, &self.extension);
        let mut document = front.render();
        document.push_str(&render_blocks(blocks));
        (front.slug, document)
    }

    /// Fetch a record's blocks and render its document without touching disk
    ///
    /// # Errors
    ///
    /// Returns an error if the record's blocks cannot be fetched.
    pub async fn prepare(&self, record: &Record) -> Result<PreparedDocument> {
        log_record_start!(record.id);

        let blocks = fetch_blocks(self.store.as_ref(), &record.id, self.follow_pagination).await?;
        let (file_name, document) = self.document(record, &blocks);

        Ok(PreparedDocument {
            record_id: record.id.clone(),
            path: self.output_dir.join(file_name),
            document,
            block_count: blocks.len(),
        })
    }

    /// Write a prepared document, overwriting any previous export
    ///
    /// Returns the path of the written file. In dry-run mode nothing is
    /// written and the path is the one that would have been used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write(&self, prepared: PreparedDocument) -> Result<PathBuf> {
        let PreparedDocument {
            record_id,
            path,
            document,
            block_count,
        } = prepared;

        if self.dry_run {
            tracing::info!(
                record_id = %record_id,
                file = %path.display(),
                bytes = document.len(),
                "Dry run - skipping write"
            );
        } else {
            tokio::fs::write(&path, document.as_bytes())
                .await
                .map_err(|e| ScribeError::Io(format!("Failed to write {}: {e}", path.display())))?;
        }

        log_record_complete!(record_id, path.display(), block_count);
        Ok(path)
    }
}

/// A rendered record waiting to be written
#[derive(Debug)]
pub struct PreparedDocument {
    record_id: RecordId,
    path: PathBuf,
    document: String,
    block_count: usize,
}
