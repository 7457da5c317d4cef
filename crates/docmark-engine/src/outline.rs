use serde::Serialize;

use crate::parsing::blocks::{BlockKind, BlockNode};
use crate::render::plain_text;

/// A heading in the document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub level: u8,
    /// Heading text with inline markup removed.
    pub title: String,
    pub line: usize,
}

pub fn outline(blocks: &[BlockNode]) -> Vec<OutlineEntry> {
    blocks
        .iter()
        .filter_map(|block| match &block.kind {
            BlockKind::Heading { level, text } => Some(OutlineEntry {
                level: *level,
                title: plain_text(text),
                line: block.start_line,
            }),
            _ => None,
        })
        .collect()
}
