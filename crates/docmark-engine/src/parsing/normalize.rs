//! Blank-line insertion for loosely formatted input.
//!
//! Chat assistants routinely emit headings, fences and tables without the
//! blank lines Markdown expects around them. [`normalize`] puts them back
//! with one forward pass over classified lines, then collapses runs of
//! blank lines outside fences to a single one. Non-blank lines are never
//! changed, and normalizing twice gives the same text as normalizing once.

use super::blocks::{FenceState, LineKind, MarkdownLineClassifier};
use super::preprocess::unify_newlines;

/// Normalized text plus the source line each output line came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// 1-based source line for every output line. Inserted blanks borrow
    /// the line that follows them.
    pub origins: Vec<usize>,
}

impl Normalized {
    /// Maps a 1-based normalized line number back to its source line.
    pub fn source_line(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|i| self.origins.get(i))
            .copied()
            .unwrap_or(line)
    }
}

pub fn normalize(text: &str) -> String {
    normalize_with_origins(text).text
}

pub fn normalize_with_origins(text: &str) -> Normalized {
    let text = unify_newlines(text);
    let classifier = MarkdownLineClassifier;

    let mut out: Vec<&str> = vec![];
    let mut origins = vec![];
    let mut state = FenceState::Closed;
    let mut prev = LineKind::Empty;
    let mut prev_closed_region = false;

    for (i, line) in text.split('\n').enumerate() {
        let kind = classifier.classify(line, state);
        let closes_region = state.is_closed_by(kind);

        if kind == LineKind::Empty {
            // Only reachable outside fences: inside, blank lines are verbatim.
            let last_blank = out.last().is_some_and(|l| l.trim().is_empty());
            if !last_blank {
                out.push(line);
                origins.push(i + 1);
            }
        } else {
            if prev != LineKind::Empty
                && (needs_blank_after(prev, prev_closed_region) || needs_blank_before(prev, kind))
            {
                out.push("");
                origins.push(i + 1);
            }
            out.push(line);
            origins.push(i + 1);
        }

        state = state.advance(line, kind);
        prev = kind;
        prev_closed_region = closes_region;
    }

    Normalized {
        text: out.join("\n"),
        origins,
    }
}

/// Transition table: does `cur` need separating from the line before it?
fn needs_blank_before(prev: LineKind, cur: LineKind) -> bool {
    use LineKind::*;

    match (prev, cur) {
        (Empty, _) | (_, Empty) | (_, Verbatim) => false,
        (_, Rule) => true,
        (Heading, Heading) => false,
        (_, Heading) => true,
        // A closing fence follows the fenced body, or an empty body's opener.
        (Verbatim | CodeFence, CodeFence) => false,
        (_, CodeFence) => true,
        (_, TableSeparator) => false,
        (prev, TableRow) if prev.is_table() => false,
        (_, TableRow) => true,
        (prev, cur) if prev.is_list() && cur.is_list() => false,
        (_, ListItem { .. } | TaskItem { .. }) => true,
        (Verbatim | MathFence, MathFence) => false,
        (_, MathFence) => true,
        (Quote, Quote) => false,
        (_, Quote) => true,
        (_, Text) => false,
    }
}

/// Lines that always want a blank line after them.
fn needs_blank_after(kind: LineKind, closed_region: bool) -> bool {
    closed_region || matches!(kind, LineKind::Heading | LineKind::Rule)
}
