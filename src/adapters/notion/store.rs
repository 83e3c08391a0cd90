//! Notion store trait definition
//!
//! `NotionStore` is the narrow view of the Notion API the exporter needs:
//! one filtered database query and one block listing, both cursor-paginated.
//! `NotionClient` implements it over HTTP; tests implement it in memory.

use crate::domain::ids::{DatabaseId, RecordId};
use crate::domain::{Block, Record, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

/// One page of a cursor-paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page, in API order
    pub results: Vec<T>,

    /// Cursor for the next page; `None` on the last page
    pub next_cursor: Option<String>,
}

impl<T> Paginated<T> {
    /// A page with no successor
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
        }
    }

    /// A page followed by the page at `cursor`
    pub fn with_next(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
        }
    }
}

/// Database query filter: a checkbox property must equal a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    /// Name of the checkbox property
    pub property: String,

    /// Required value
    pub equals: bool,
}

impl QueryFilter {
    /// Filter for records whose `property` checkbox is ticked
    pub fn checked(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            equals: true,
        }
    }

    /// Request body fragment understood by the database query endpoint
    pub fn to_json(&self) -> Value {
        json!({
            "property": self.property,
            "checkbox": { "equals": self.equals }
        })
    }
}

/// Remote source of records and their content blocks
///
/// Implementations must be safe to call concurrently from many tasks.
#[async_trait]
pub trait NotionStore: Send + Sync {
    /// Query one page of records matching `filter`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    async fn query_database(
        &self,
        database_id: &DatabaseId,
        filter: &QueryFilter,
        start_cursor: Option<&str>,
    ) -> Result<Paginated<Record>>;

    /// List one page of a record's top-level content blocks
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    async fn get_children(
        &self,
        record_id: &RecordId,
        start_cursor: Option<&str>,
    ) -> Result<Paginated<Block>>;
}

/// Query every page of records matching `filter`
///
/// Follows `next_cursor` until the store reports the last page.
pub async fn query_all(
    store: &dyn NotionStore,
    database_id: &DatabaseId,
    filter: &QueryFilter,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = store
            .query_database(database_id, filter, cursor.as_deref())
            .await?;
        records.extend(page.results);

        match page.next_cursor {
            Some(next) => {
                tracing::debug!(
                    database_id = %database_id,
                    fetched = records.len(),
                    "Fetching next page of records"
                );
                cursor = Some(next);
            }
            None => break,
        }
    }

    Ok(records)
}

/// Fetch a record's content blocks in order
///
/// With `follow_pagination` false only the first page is returned and any
/// remaining pages are reported in the log.
pub async fn fetch_blocks(
    store: &dyn NotionStore,
    record_id: &RecordId,
    follow_pagination: bool,
) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = store.get_children(record_id, cursor.as_deref()).await?;
        blocks.extend(page.results);

        match page.next_cursor {
            Some(next) if follow_pagination => cursor = Some(next),
            Some(_) => {
                tracing::warn!(
                    record_id = %record_id,
                    fetched = blocks.len(),
                    "Page has more blocks than the first page; pagination is disabled so they are skipped"
                );
                break;
            }
            None => break,
        }
    }

    Ok(blocks)
}
