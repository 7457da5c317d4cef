//! Flattening nested inline markup into runs with accumulated style.
//!
//! The inline tokenizer hands back emphasis content unparsed. Renderers want
//! a flat list of runs each carrying every style that applies, so content is
//! re-tokenized with the flags of its enclosing spans:
//!
//! ```text
//! **a _b_ $x^2$**  →  [a ](bold)  [b](bold+italic)  [ ](bold)  [x^2 math](bold)
//! ```

use serde::Serialize;

use crate::math::looks_like_math;
use crate::parsing::inline::{InlineKind, parse_inline};

/// Nesting deeper than this is emitted as text in the style reached so far.
pub const MAX_STYLE_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub superscript: bool,
    pub subscript: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        bold: false,
        italic: false,
        strike: false,
        superscript: false,
        subscript: false,
    };

    /// This style with the flag of a styled inline kind added.
    pub fn with(self, kind: InlineKind) -> Self {
        let mut style = self;
        match kind {
            InlineKind::Bold => style.bold = true,
            InlineKind::Italic => style.italic = true,
            InlineKind::BoldItalic => {
                style.bold = true;
                style.italic = true;
            }
            InlineKind::Strikethrough => style.strike = true,
            InlineKind::Superscript => style.superscript = true,
            InlineKind::Subscript => style.subscript = true,
            _ => {}
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunContent {
    Text { text: String },
    Code { code: String },
    /// A span that passed [`looks_like_math`].
    Math { latex: String },
    Link { text: String, url: String },
    Image { alt: String, url: String },
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    #[serde(flatten)]
    pub content: RunContent,
    pub style: Style,
}

impl StyledRun {
    fn new(content: RunContent, style: Style) -> Self {
        Self { content, style }
    }

    /// The run's text with all markup gone.
    pub fn plain_text(&self) -> &str {
        match &self.content {
            RunContent::Text { text } | RunContent::Link { text, .. } => text,
            RunContent::Code { code } => code,
            RunContent::Math { latex } => latex,
            RunContent::Image { alt, .. } => alt,
            RunContent::LineBreak => "\n",
        }
    }
}

pub fn styled_runs(text: &str, style: Style) -> Vec<StyledRun> {
    let mut out = vec![];
    collect(text, style, 0, &mut out);
    out
}

/// Concatenated [`StyledRun::plain_text`] of `text`.
pub fn plain_text(text: &str) -> String {
    styled_runs(text, Style::PLAIN)
        .iter()
        .map(StyledRun::plain_text)
        .collect()
}

fn collect(text: &str, style: Style, depth: usize, out: &mut Vec<StyledRun>) {
    if depth >= MAX_STYLE_DEPTH {
        out.push(StyledRun::new(
            RunContent::Text {
                text: text.to_string(),
            },
            style,
        ));
        return;
    }

    for node in parse_inline(text) {
        let content = match node.kind {
            kind if kind.is_styled() => {
                collect(&node.text, style.with(kind), depth + 1, out);
                continue;
            }
            InlineKind::Code => RunContent::Code { code: node.text },
            InlineKind::Math if looks_like_math(&node.text) => RunContent::Math { latex: node.text },
            InlineKind::Math => RunContent::Text {
                text: node.span.slice(text).to_string(),
            },
            InlineKind::Link => RunContent::Link {
                text: node.text,
                url: node.url.unwrap_or_default(),
            },
            InlineKind::Image => RunContent::Image {
                alt: node.text,
                url: node.url.unwrap_or_default(),
            },
            InlineKind::LineBreak => RunContent::LineBreak,
            _ => RunContent::Text { text: node.text },
        };
        out.push(StyledRun::new(content, style));
    }
}
