use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, HtmlTag, Link, MathSpan},
    types::{InlineKind, InlineNode},
};

/// The inline rules, one per syntax. [`InlineRule::PRECEDENCE`] is the
/// order in which they are tried at every position; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    Image,
    Link,
    Code,
    Math,
    LineBreak,
    Superscript,
    Subscript,
    BoldItalic,
    Bold,
    Italic,
    Strikethrough,
}

impl InlineRule {
    pub const PRECEDENCE: [InlineRule; 11] = [
        InlineRule::Image,
        InlineRule::Link,
        InlineRule::Code,
        InlineRule::Math,
        InlineRule::LineBreak,
        InlineRule::Superscript,
        InlineRule::Subscript,
        InlineRule::BoldItalic,
        InlineRule::Bold,
        InlineRule::Italic,
        InlineRule::Strikethrough,
    ];

    /// Tries this rule at the cursor. On success the cursor moves past the
    /// match; on failure it stays put.
    pub fn try_match(self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        let start = cur.pos();
        let rest = cur.rest();

        let (node, len) = match self {
            InlineRule::Image => {
                let (alt, url, len) = Link::image_at(rest)?;
                (InlineNode::new(InlineKind::Image, alt, Span::default()).with_url(url), len)
            }
            InlineRule::Link => {
                let (text, url, len) = Link::link_at(rest)?;
                (InlineNode::new(InlineKind::Link, text, Span::default()).with_url(url), len)
            }
            InlineRule::Code => {
                let end = CodeSpan::close(rest)?;
                (InlineNode::new(InlineKind::Code, &rest[1..end], Span::default()), end + 1)
            }
            InlineRule::Math => {
                let end = MathSpan::close(rest)?;
                (InlineNode::new(InlineKind::Math, &rest[1..end], Span::default()), end + 1)
            }
            InlineRule::LineBreak => {
                let len = HtmlTag::line_break(rest)?;
                (InlineNode::new(InlineKind::LineBreak, "\n", Span::default()), len)
            }
            InlineRule::Superscript => {
                let (text, len) = HtmlTag::wrapped(rest, HtmlTag::SUP)?;
                (InlineNode::new(InlineKind::Superscript, text, Span::default()), len)
            }
            InlineRule::Subscript => {
                let (text, len) = HtmlTag::wrapped(rest, HtmlTag::SUB)?;
                (InlineNode::new(InlineKind::Subscript, text, Span::default()), len)
            }
            InlineRule::BoldItalic => delimited(rest, &Emphasis::STRONG_EMPHASIS, InlineKind::BoldItalic)?,
            InlineRule::Bold => delimited(rest, &Emphasis::STRONG, InlineKind::Bold)?,
            InlineRule::Strikethrough => delimited(rest, &[Emphasis::STRIKE], InlineKind::Strikethrough)?,
            InlineRule::Italic => {
                let marker = cur.peek().filter(|&b| b == Emphasis::STAR || b == Emphasis::UNDERSCORE)?;
                let end = Emphasis::italic_close(rest, marker, cur.prev())?;
                (InlineNode::new(InlineKind::Italic, &rest[1..end], Span::default()), end + 1)
            }
        };

        cur.bump_n(len);
        Some(InlineNode {
            span: Span::new(start, start + len),
            ..node
        })
    }
}

/// Symmetric delimiters matched lazily within one line.
fn delimited(rest: &str, delims: &[&str], kind: InlineKind) -> Option<(InlineNode, usize)> {
    delims.iter().find_map(|delim| {
        let end = Emphasis::lazy_close(rest, delim)?;
        let node = InlineNode::new(kind, &rest[delim.len()..end], Span::default());
        Some((node, end + delim.len()))
    })
}

/// Tokenizes one block's raw text into inline elements.
///
/// The elements cover the whole input in order: text between matches comes
/// out as [`InlineKind::Text`]. Styled content is left raw; callers that
/// want nested styling tokenize `text` again.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(s: &str, out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::new(
                InlineKind::Text,
                &s[start..end],
                Span::new(start, end),
            ));
        }
    }

    while !cur.eof() {
        if let Some(node) = InlineRule::PRECEDENCE
            .iter()
            .find_map(|rule| rule.try_match(&mut cur))
        {
            flush_text(s, &mut out, text_start, node.span.start);
            text_start = node.span.end;
            out.push(node);
            continue;
        }
        cur.bump_char();
    }

    flush_text(s, &mut out, text_start, cur.pos());
    out
}
