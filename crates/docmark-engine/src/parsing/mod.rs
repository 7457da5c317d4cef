//! # Parsing
//!
//! ```text
//! raw text → preprocess → normalize → BlockBuilder → [parse_inline per block]
//! ```
//!
//! [`parse_document`] runs the block half of the pipeline. Inline parsing is
//! left to consumers, which call [`inline::parse_inline`] on the text of the
//! blocks they render.

pub mod blocks;
pub mod inline;
pub mod normalize;
pub mod preprocess;
pub mod span;
pub mod table;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::options::ConvertOptions;
use blocks::{BlockBuilder, BlockNode};

pub use normalize::{Normalized, normalize, normalize_with_origins};
pub use span::Span;
pub use table::{Alignment, AlignmentPolicy, Table, split_cells};

/// Blocks of one document. Line numbers refer to the caller's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Splits already-normalized text. Line numbers refer to `normalized`.
pub fn split_blocks(normalized: &str, max_heading_level: u8) -> Vec<BlockNode> {
    BlockBuilder::new(normalized, max_heading_level).finish()
}

pub fn parse_document(text: &str) -> ParsedDoc {
    parse_document_with(text, &ConvertOptions::default())
}

/// Preprocesses, normalizes and splits `text`, reporting block lines
/// against `text` itself.
pub fn parse_document_with(text: &str, options: &ConvertOptions) -> ParsedDoc {
    let prepared = preprocess::preprocess(text, options);
    let normalized = normalize_with_origins(&prepared);

    let blocks = split_blocks(&normalized.text, options.max_heading_level)
        .into_iter()
        .map(|block| BlockNode {
            start_line: normalized.source_line(block.start_line),
            end_line: normalized.source_line(block.end_line),
            ..block
        })
        .collect();

    ParsedDoc { blocks }
}
