//! Record domain model
//!
//! A record is one page returned by a database query: an id, a creation
//! timestamp and a set of named, typed properties.

use super::ids::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A run of text with a single formatting annotation
///
/// `plain_text` is the display text Notion computes for every kind of span.
/// `content` is the raw text of a `text` span; for mentions and equations,
/// which have no raw text, it falls back to `plain_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Display text
    pub plain_text: String,

    /// Raw text content
    pub content: String,

    /// Inline code annotation
    pub code: bool,
}

impl TextSpan {
    /// A plain span whose display text and content are the same
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            plain_text: text.clone(),
            content: text,
            code: false,
        }
    }

    /// An inline code span
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            code: true,
            ..Self::plain(text)
        }
    }
}

/// Typed value of a record property
///
/// Only the variants the exporter reads are modelled; every other property
/// type (checkbox, date, number, ...) is kept as `Other` with its type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// The database's title column
    Title(Vec<TextSpan>),

    /// Free text column
    RichText(Vec<TextSpan>),

    /// Multi-select column; holds option names
    MultiSelect(Vec<String>),

    /// Any property type the exporter ignores
    Other(String),
}

/// A page returned by a database query
///
/// # Examples
///
/// ```
/// use scribe::domain::record::{PropertyValue, Record, TextSpan};
/// use scribe::domain::ids::RecordId;
/// use chrono::Utc;
///
/// let record = Record::builder()
///     .id(RecordId::new("abc123").unwrap())
///     .created_time(Utc::now())
///     .property("Name", PropertyValue::Title(vec![TextSpan::plain("My Post")]))
///     .build()
///     .unwrap();
/// assert_eq!(record.properties.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Page id
    pub id: RecordId,

    /// Creation timestamp; becomes the published date
    pub created_time: DateTime<Utc>,

    /// Properties keyed by column name, iterated in name order
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Record {
    /// Creates a new builder for constructing a Record
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }
}

/// Builder for constructing Record instances
#[derive(Debug, Default)]
pub struct RecordBuilder {
    id: Option<RecordId>,
    created_time: Option<DateTime<Utc>>,
    properties: BTreeMap<String, PropertyValue>,
}

impl RecordBuilder {
    /// Sets the record id
    pub fn id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the creation time
    pub fn created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(created_time);
        self
    }

    /// Adds a property, replacing any property with the same name
    pub fn property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Builds the Record
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or `created_time` is missing
    pub fn build(self) -> Result<Record, String> {
        Ok(Record {
            id: self.id.ok_or("id is required")?,
            created_time: self.created_time.ok_or("created_time is required")?,
            properties: self.properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder_requires_id() {
        let result = Record::builder().created_time(Utc::now()).build();
        assert_eq!(result.unwrap_err(), "id is required");
    }

    #[test]
    fn test_record_builder_requires_created_time() {
        let result = Record::builder()
            .id(RecordId::new("abc").unwrap())
            .build();
        assert_eq!(result.unwrap_err(), "created_time is required");
    }

    #[test]
    fn test_properties_iterate_in_name_order() {
        let record = Record::builder()
            .id(RecordId::new("abc").unwrap())
            .created_time(Utc::now())
            .property("Tags", PropertyValue::MultiSelect(vec![]))
            .property("Description", PropertyValue::RichText(vec![]))
            .property("Name", PropertyValue::Title(vec![]))
            .build()
            .unwrap();

        let names: Vec<&str> = record.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Description", "Name", "Tags"]);
    }

    #[test]
    fn test_text_span_constructors() {
        let plain = TextSpan::plain("Hey");
        assert_eq!(plain.plain_text, "Hey");
        assert_eq!(plain.content, "Hey");
        assert!(!plain.code);

        let code = TextSpan::code("x");
        assert!(code.code);
        assert_eq!(code.content, "x");
    }
}
