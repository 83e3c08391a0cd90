//! Content blocks attached to a record

use super::record::TextSpan;
use serde::{Deserialize, Serialize};

/// Heading depth; Notion supports three
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Number of `#` characters the heading renders with
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }
}

/// One unit of page content
///
/// Closed set of the block types the exporter renders, plus `Unsupported`
/// for everything else Notion may return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        spans: Vec<TextSpan>,
    },
    Paragraph(Vec<TextSpan>),
    Code {
        language: String,
        spans: Vec<TextSpan>,
    },
    BulletedListItem(Vec<TextSpan>),
    /// Block type the exporter does not render; keeps the Notion type name
    Unsupported(String),
}

impl Block {
    /// Notion type name of the block, used in log output
    pub fn kind(&self) -> &str {
        match self {
            Block::Heading {
                level: HeadingLevel::One,
                ..
            } => "heading_1",
            Block::Heading {
                level: HeadingLevel::Two,
                ..
            } => "heading_2",
            Block::Heading {
                level: HeadingLevel::Three,
                ..
            } => "heading_3",
            Block::Paragraph(_) => "paragraph",
            Block::Code { .. } => "code",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::Unsupported(kind) => kind,
        }
    }
}
