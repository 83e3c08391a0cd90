//! Notion API wire models
//!
//! Serde mirrors of the JSON objects returned by the database query and
//! block children endpoints, and their conversion into domain types.
//! Only the fields the exporter reads are declared; everything else in the
//! payload is ignored.

use crate::domain::ids::RecordId;
use crate::domain::{Block, HeadingLevel, NotionError, PropertyValue, Record, TextSpan};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Paginated list envelope (`"object": "list"`)
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,

    #[serde(default)]
    pub has_more: bool,

    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    /// Cursor to continue from, if the API reports more results
    pub fn continuation(&self) -> Option<String> {
        if self.has_more {
            self.next_cursor.clone()
        } else {
            None
        }
    }
}

/// Rich text object
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextObject {
    #[serde(default)]
    pub plain_text: String,

    /// Present on `text` spans only
    #[serde(default)]
    pub text: Option<TextObject>,

    #[serde(default)]
    pub annotations: Option<Annotations>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextObject {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub code: bool,
}

impl From<RichTextObject> for TextSpan {
    fn from(rich: RichTextObject) -> Self {
        let content = match rich.text {
            Some(text) => text.content,
            None => rich.plain_text.clone(),
        };
        TextSpan {
            plain_text: rich.plain_text,
            content,
            code: rich.annotations.map(|a| a.code).unwrap_or(false),
        }
    }
}

fn spans(rich_text: Vec<RichTextObject>) -> Vec<TextSpan> {
    rich_text.into_iter().map(TextSpan::from).collect()
}

/// Multi-select option
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Page property value, discriminated by `type`
///
/// The payload lives under a key named after the type; only the three
/// payloads the exporter reads are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyObject {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub title: Option<Vec<RichTextObject>>,

    #[serde(default)]
    pub rich_text: Option<Vec<RichTextObject>>,

    #[serde(default)]
    pub multi_select: Option<Vec<SelectOption>>,
}

impl From<PropertyObject> for PropertyValue {
    fn from(property: PropertyObject) -> Self {
        match property.kind.as_str() {
            "title" => PropertyValue::Title(spans(property.title.unwrap_or_default())),
            "rich_text" => PropertyValue::RichText(spans(property.rich_text.unwrap_or_default())),
            "multi_select" => PropertyValue::MultiSelect(
                property
                    .multi_select
                    .unwrap_or_default()
                    .into_iter()
                    .map(|option| option.name)
                    .collect(),
            ),
            _ => PropertyValue::Other(property.kind),
        }
    }
}

/// Page object as returned by a database query
#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub id: String,

    pub created_time: DateTime<Utc>,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertyObject>,
}

impl TryFrom<PageObject> for Record {
    type Error = NotionError;

    fn try_from(page: PageObject) -> Result<Self, Self::Error> {
        let id = RecordId::new(page.id).map_err(NotionError::InvalidResponse)?;
        Ok(Record {
            id,
            created_time: page.created_time,
            properties: page
                .properties
                .into_iter()
                .map(|(name, property)| (name, PropertyValue::from(property)))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodePayload {
    #[serde(default)]
    pub rich_text: Vec<RichTextObject>,

    #[serde(default)]
    pub language: String,
}

/// Block object, discriminated by `type`
#[derive(Debug, Clone, Deserialize)]
pub struct BlockObject {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub heading_1: Option<TextPayload>,

    #[serde(default)]
    pub heading_2: Option<TextPayload>,

    #[serde(default)]
    pub heading_3: Option<TextPayload>,

    #[serde(default)]
    pub paragraph: Option<TextPayload>,

    #[serde(default)]
    pub bulleted_list_item: Option<TextPayload>,

    #[serde(default)]
    pub code: Option<CodePayload>,
}

fn heading(level: HeadingLevel, payload: Option<TextPayload>) -> Block {
    Block::Heading {
        level,
        spans: spans(payload.unwrap_or_default().rich_text),
    }
}

impl From<BlockObject> for Block {
    fn from(block: BlockObject) -> Self {
        match block.kind.as_str() {
            "heading_1" => heading(HeadingLevel::One, block.heading_1),
            "heading_2" => heading(HeadingLevel::Two, block.heading_2),
            "heading_3" => heading(HeadingLevel::Three, block.heading_3),
            "paragraph" => Block::Paragraph(spans(block.paragraph.unwrap_or_default().rich_text)),
            "bulleted_list_item" => Block::BulletedListItem(spans(
                block.bulleted_list_item.unwrap_or_default().rich_text,
            )),
            "code" => {
                let code = block.code.unwrap_or_default();
                Block::Code {
                    language: code.language,
                    spans: spans(code.rich_text),
                }
            }
            _ => Block::Unsupported(block.kind),
        }
    }
}
