//! Markdown rendering
//!
//! - [`markdown`] - block to Markdown conversion
//! - [`frontmatter`] - page metadata block and output file naming

pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{file_name, FrontMatter};
pub use markdown::{render_block, render_blocks};
