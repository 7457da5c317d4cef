use serde::Serialize;

/// Whether a list entry is a plain item or a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListItemKind {
    Item,
    Task { checked: bool },
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Nesting level: indentation width divided by two.
    pub level: usize,
    pub kind: ListItemKind,
    /// Raw inline text of the item, marker and checkbox removed.
    pub text: String,
}

impl ListItem {
    pub fn checked(&self) -> Option<bool> {
        match self.kind {
            ListItemKind::Item => None,
            ListItemKind::Task { checked } => Some(checked),
        }
    }
}

/// The kind of a block together with its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    Heading {
        level: u8,
        text: String,
    },
    /// Soft-wrapped lines joined with single spaces.
    Paragraph {
        text: String,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    MathBlock {
        latex: String,
    },
    /// Raw table lines. Cells are split later by [`crate::parsing::Table`].
    Table {
        raw: String,
    },
    /// Quote lines with one `>` stripped, joined with newlines.
    Quote {
        text: String,
    },
    /// A homogeneous run of items: all ordered or all unordered.
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    Image {
        alt: String,
        url: String,
    },
    Rule,
}

impl BlockKind {
    /// Short lowercase name used in progress reports and errors.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::CodeBlock { .. } => "code_block",
            BlockKind::MathBlock { .. } => "math_block",
            BlockKind::Table { .. } => "table",
            BlockKind::Quote { .. } => "quote",
            BlockKind::List { .. } => "list",
            BlockKind::Image { .. } => "image",
            BlockKind::Rule => "hr",
        }
    }

    /// The block's content as flat text.
    pub fn content_text(&self) -> String {
        match self {
            BlockKind::Heading { text, .. }
            | BlockKind::Paragraph { text }
            | BlockKind::Quote { text } => text.clone(),
            BlockKind::CodeBlock { code, .. } => code.clone(),
            BlockKind::MathBlock { latex } => latex.clone(),
            BlockKind::Table { raw } => raw.clone(),
            BlockKind::List { items, .. } => items
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            BlockKind::Image { alt, url } => format!("![{alt}]({url})"),
            BlockKind::Rule => String::new(),
        }
    }
}

/// A parsed block and the 1-based lines it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    #[serde(flatten)]
    pub kind: BlockKind,
    pub start_line: usize,
    /// Last covered line, inclusive.
    pub end_line: usize,
}

impl BlockNode {
    /// The block's content, whitespace-collapsed and cut to `max_chars`.
    pub fn snippet(&self, max_chars: usize) -> String {
        let text = self.kind.content_text();
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(max_chars)
            .collect()
    }
}
