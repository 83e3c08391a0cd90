//! Block renderer
//!
//! Pure conversion of content blocks into Markdown text. No I/O happens
//! here; unsupported blocks are logged and contribute nothing.

use crate::domain::{Block, HeadingLevel, TextSpan};

/// Render a single block as Markdown
///
/// | Block | Output |
/// |---|---|
/// | heading | one `#`-prefixed line per span |
/// | paragraph | spans concatenated, code spans in backticks, one trailing newline |
/// | code | fenced block tagged with the language |
/// | bulleted list item | one `- ` line per span |
/// | anything else | empty string |
///
/// # Examples
///
/// ```
/// use scribe::core::render::render_block;
/// use scribe::domain::{Block, TextSpan};
///
/// let block = Block::Paragraph(vec![TextSpan::plain("Hey "), TextSpan::code("Hey")]);
/// assert_eq!(render_block(&block), "Hey `Hey`\n");
/// ```
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, spans } => render_heading(*level, spans),
        Block::Paragraph(spans) => render_paragraph(spans),
        Block::Code { language, spans } => render_code(language, spans),
        Block::BulletedListItem(spans) => render_bullets(spans),
        Block::Unsupported(_) => {
            tracing::warn!(block_type = %block.kind(), "Skipping unsupported block");
            String::new()
        }
    }
}

/// Render blocks in order and concatenate the results
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect()
}

fn render_heading(level: HeadingLevel, spans: &[TextSpan]) -> String {
    let marker = "#".repeat(level.depth());
    spans
        .iter()
        .map(|span| format!("{marker} {}\n", span.plain_text))
        .collect()
}

fn render_paragraph(spans: &[TextSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.code {
            out.push('`');
            out.push_str(&span.content);
            out.push('`');
        } else {
            out.push_str(&span.content);
        }
    }
    out.push('\n');
    out
}

fn render_code(language: &str, spans: &[TextSpan]) -> String {
    let mut out = format!("```{language}\n");
    for span in spans {
        out.push_str(&span.content);
    }
    // Closing fence is padded on both sides
    out.push_str("\n ``` \n");
    out
}

fn render_bullets(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|span| format!("- {}\n", span.plain_text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(HeadingLevel::One, "#" ; "level one")]
    #[test_case(HeadingLevel::Two, "##" ; "level two")]
    #[test_case(HeadingLevel::Three, "###" ; "level three")]
    fn test_heading_renders_one_line_per_span(level: HeadingLevel, marker: &str) {
        let block = Block::Heading {
            level,
            spans: vec![TextSpan::plain("Intro"), TextSpan::plain("Part two")],
        };

        assert_eq!(
            render_block(&block),
            format!("{marker} Intro\n{marker} Part two\n")
        );
    }

    #[test]
    fn test_heading_uses_display_text() {
        let span = TextSpan {
            plain_text: "@Jane".to_string(),
            content: "raw".to_string(),
            code: true,
        };
        let block = Block::Heading {
            level: HeadingLevel::One,
            spans: vec![span],
        };

        assert_eq!(render_block(&block), "# @Jane\n");
    }

    #[test]
    fn test_empty_heading_renders_nothing() {
        let block = Block::Heading {
            level: HeadingLevel::Two,
            spans: vec![],
        };
        assert_eq!(render_block(&block), "");
    }

    #[test]
    fn test_paragraph_single_plain_span() {
        let block = Block::Paragraph(vec![TextSpan::plain("Hey")]);
        assert_eq!(render_block(&block), "Hey\n");
    }

    #[test]
    fn test_paragraph_wraps_code_spans() {
        let block = Block::Paragraph(vec![TextSpan::plain("Hey "), TextSpan::code("Hey")]);
        assert_eq!(render_block(&block), "Hey `Hey`\n");
    }

    #[test]
    fn test_empty_paragraph_is_single_newline() {
        assert_eq!(render_block(&Block::Paragraph(vec![])), "\n");
    }

    #[test]
    fn test_code_block_fences() {
        let block = Block::Code {
            language: "go".to_string(),
            spans: vec![TextSpan::plain("fmt.Println()")],
        };

        let rendered = render_block(&block);
        assert!(rendered.starts_with("```go\n"));
        assert!(rendered.ends_with("\n ``` \n"));
        assert_eq!(rendered, "```go\nfmt.Println()\n ``` \n");
    }

    #[test]
    fn test_code_block_concatenates_spans_verbatim() {
        let block = Block::Code {
            language: "rust".to_string(),
            spans: vec![TextSpan::plain("let x = 1;\n"), TextSpan::code("x")],
        };
        assert_eq!(render_block(&block), "```rust\nlet x = 1;\nx\n ``` \n");
    }

    #[test]
    fn test_bulleted_list_item() {
        let block = Block::BulletedListItem(vec![TextSpan::plain("one"), TextSpan::plain("two")]);
        assert_eq!(render_block(&block), "- one\n- two\n");
        assert_eq!(render_block(&Block::BulletedListItem(vec![])), "");
    }

    #[test]
    fn test_unsupported_block_is_empty() {
        assert_eq!(render_block(&Block::Unsupported("divider".to_string())), "");
    }

    #[test]
    fn test_render_blocks_preserves_order() {
        let blocks = vec![
            Block::Heading {
                level: HeadingLevel::One,
                spans: vec![TextSpan::plain("Title")],
            },
            Block::Unsupported("image".to_string()),
            Block::Paragraph(vec![TextSpan::plain("Body")]),
        ];
        assert_eq!(render_blocks(&blocks), "# Title\nBody\n");
    }
}
