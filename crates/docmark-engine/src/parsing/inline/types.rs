use serde::Serialize;

use crate::parsing::span::Span;

/// What an inline element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKind {
    Text,
    Bold,
    Italic,
    BoldItalic,
    Code,
    Math,
    Link,
    Image,
    Strikethrough,
    Superscript,
    Subscript,
    LineBreak,
}

impl InlineKind {
    /// Kinds whose text is itself inline markup, open to re-tokenizing.
    pub fn is_styled(self) -> bool {
        matches!(
            self,
            InlineKind::Bold
                | InlineKind::Italic
                | InlineKind::BoldItalic
                | InlineKind::Strikethrough
                | InlineKind::Superscript
                | InlineKind::Subscript
        )
    }
}

/// One inline element.
///
/// `text` is the content with delimiters removed: the inner raw markup for
/// styled kinds, the label for links, the alt text for images and `"\n"`
/// for line breaks. `span` covers the element's raw markup in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineNode {
    pub kind: InlineKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub span: Span,
}

impl InlineNode {
    pub fn new(kind: InlineKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
            span,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
