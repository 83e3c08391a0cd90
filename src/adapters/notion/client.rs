//! Notion REST client
//!
//! HTTP implementation of [`NotionStore`] on top of `reqwest`. A single
//! client is shared by every conversion task; `reqwest::Client` pools
//! connections internally and is safe to use concurrently.

use super::models::{BlockObject, ListResponse, PageObject};
use super::store::{NotionStore, Paginated, QueryFilter};
use crate::config::{NotionConfig, SecretString};
use crate::domain::ids::{DatabaseId, RecordId};
use crate::domain::{Block, NotionError, Record, Result, ScribeError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Notion API client
///
/// # Example
///
/// ```no_run
/// use scribe::adapters::notion::NotionClient;
/// use scribe::config::{secret_string, NotionConfig};
///
/// # fn example() -> scribe::domain::Result<()> {
/// let config = NotionConfig {
///     api_key: Some(secret_string("secret_abc".to_string())),
///     ..Default::default()
/// };
/// let client = NotionClient::new(&config)?;
/// assert_eq!(client.base_url(), "https://api.notion.com/v1");
/// # Ok(())
/// # }
/// ```
pub struct NotionClient {
    base_url: String,
    client: Client,
    api_key: SecretString,
    api_version: String,
    page_size: u32,
}

impl NotionClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is configured or the
    /// HTTP client cannot be built.
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ScribeError::Configuration("notion.api_key is required (set NOTION_KEY)".to_string())
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("scribe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ScribeError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
            api_version: config.api_version.clone(),
            page_size: config.page_size,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token: &str = self.api_key.expose_secret().as_ref();
        request
            .bearer_auth(token)
            .header("Notion-Version", &self.api_version)
    }

    /// Send a request and decode a successful JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| NotionError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotionError::from_status(status.as_u16(), api_message(&body)).into());
        }

        resp.json::<T>()
            .await
            .map_err(|e| NotionError::InvalidResponse(e.to_string()).into())
    }
}

/// Pull `message` out of a Notion error body, falling back to the raw body
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl NotionStore for NotionClient {
    async fn query_database(
        &self,
        database_id: &DatabaseId,
        filter: &QueryFilter,
        start_cursor: Option<&str>,
    ) -> Result<Paginated<Record>> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);

        let mut body = json!({
            "filter": filter.to_json(),
            "page_size": self.page_size,
        });
        if let Some(cursor) = start_cursor {
            body["start_cursor"] = json!(cursor);
        }

        tracing::debug!(
            url = %url,
            cursor = ?start_cursor,
            "Querying database"
        );

        let list: ListResponse<PageObject> = self.send(self.client.post(&url).json(&body)).await?;
        let next_cursor = list.continuation();

        let results = list
            .results
            .into_iter()
            .map(Record::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Paginated {
            results,
            next_cursor,
        })
    }

    async fn get_children(
        &self,
        record_id: &RecordId,
        start_cursor: Option<&str>,
    ) -> Result<Paginated<Block>> {
        let url = format!("{}/blocks/{}/children", self.base_url, record_id);

        let mut query = vec![("page_size", self.page_size.to_string())];
        if let Some(cursor) = start_cursor {
            query.push(("start_cursor", cursor.to_string()));
        }

        tracing::debug!(
            url = %url,
            cursor = ?start_cursor,
            "Fetching block children"
        );

        let list: ListResponse<BlockObject> = self.send(self.client.get(&url).query(&query)).await?;
        let next_cursor = list.continuation();

        Ok(Paginated {
            results: list.results.into_iter().map(Block::from).collect(),
            next_cursor,
        })
    }
}
