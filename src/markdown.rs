//! Markdown inspection helpers for bot replies.
//!
//! Replies may contain fenced code blocks; the chat front end numbers them
//! and offers them for copying. Parsing goes through pulldown-cmark so
//! indented blocks and fences inside other constructs are handled the same
//! way a markdown renderer would.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// A code block extracted from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// The fence's info string, if one was given (e.g. `rust`).
    pub language: Option<String>,

    /// The verbatim code, without the fences.
    pub code: String,
}

/// Extracts all code blocks from `text` in document order, each paired with
/// the byte range it occupies in `text` (fences included).
///
/// The renderer and `/copy n` both number blocks off this scan, so a block's
/// printed label always addresses the block that gets copied.
pub fn code_block_spans(text: &str) -> Vec<(Range<usize>, CodeBlock)> {
    let mut blocks = Vec::new();
    let mut current: Option<(Range<usize>, CodeBlock)> = None;

    for (event, range) in Parser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => {
                        Some(info.split_whitespace().next().unwrap_or("").to_string())
                    }
                    _ => None,
                };
                current = Some((
                    range,
                    CodeBlock {
                        language,
                        code: String::new(),
                    },
                ));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((span, mut block)) = current.take() {
                    // Markdown code blocks carry a trailing newline.
                    if block.code.ends_with('\n') {
                        block.code.pop();
                    }
                    blocks.push((span, block));
                }
            }
            Event::Text(text) => {
                if let Some((_, block)) = current.as_mut() {
                    block.code.push_str(&text);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Extracts all code blocks from `text` in document order.
pub fn code_blocks(text: &str) -> Vec<CodeBlock> {
    code_block_spans(text)
        .into_iter()
        .map(|(_, block)| block)
        .collect()
}
