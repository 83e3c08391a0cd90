//! Front matter and file naming
//!
//! Every exported page starts with a `---` delimited metadata block read by
//! static site generators. Keys are emitted in a fixed order so reruns over
//! unchanged data produce identical files.

use crate::domain::ids::RecordId;
use crate::domain::{PropertyValue, Record, TextSpan};
use chrono::{DateTime, SecondsFormat, Utc};

/// Metadata written at the top of an exported page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Record creation time
    pub pub_date_time: DateTime<Utc>,

    /// Concatenated title text
    pub title: String,

    /// Output file name, extension included
    pub slug: String,

    /// Concatenated free-text property
    pub description: String,

    /// Multi-select option names
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Extract front matter from a record's properties
    ///
    /// Properties are visited in name order. Title properties feed the title
    /// and file name, rich text properties the description and multi-select
    /// properties the tag list; other property types are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribe::core::render::FrontMatter;
    /// use scribe::domain::{PropertyValue, Record, RecordId, TextSpan};
    /// use chrono::Utc;
    ///
    /// let record = Record::builder()
    ///     .id(RecordId::new("abc123").unwrap())
    ///     .created_time(Utc::now())
    ///     .property("Name", PropertyValue::Title(vec![TextSpan::plain("My Post")]))
    ///     .build()
    ///     .unwrap();
    ///
    /// let front = FrontMatter::extract(&record, "md");
    /// assert_eq!(front.title, "My Post");
    /// assert_eq!(front.slug, "abc123_my-post.md");
    /// ```
    pub fn extract(record: &Record, extension: &str) -> Self {
        let mut title = String::new();
        let mut description = String::new();
        let mut tags = Vec::new();

        for value in record.properties.values() {
            match value {
                PropertyValue::Title(spans) => push_plain(&mut title, spans),
                PropertyValue::RichText(spans) => push_plain(&mut description, spans),
                PropertyValue::MultiSelect(names) => tags.extend(names.iter().cloned()),
                PropertyValue::Other(_) => {}
            }
        }

        Self {
            pub_date_time: record.created_time,
            slug: file_name(&record.id, &title, extension),
            title,
            description,
            tags,
        }
    }

    /// Render the delimited metadata block
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!(
            "pubDateTime: {}\n",
            self.pub_date_time.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        out.push_str(&format!("title: {}\n", self.title));
        out.push_str(&format!("postSlug: {}\n", self.slug));
        out.push_str(&format!("description: {}\n", self.description));
        out.push_str("tags: \n");
        for tag in &self.tags {
            out.push_str(&format!("  - {tag}\n"));
        }
        out.push_str("---\n");
        out
    }
}

fn push_plain(target: &mut String, spans: &[TextSpan]) {
    for span in spans {
        target.push_str(&span.plain_text);
    }
}

/// Derive the output file name for a record
///
/// `<id>_<title>` lower-cased with spaces replaced by hyphens, followed by
/// the extension. Path separators become hyphens too so a title can never
/// point outside the output directory.
pub fn file_name(id: &RecordId, title: &str, extension: &str) -> String {
    let stem = format!("{id}_{title}")
        .to_lowercase()
        .replace([' ', '/', '\\'], "-");
    format!("{stem}.{extension}")
}
