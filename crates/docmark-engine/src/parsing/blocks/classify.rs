use serde::Serialize;

use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, ListMarker, MathFence, TableRow, ThematicBreak,
};

/// The structural role of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Empty,
    Heading,
    /// Opening or closing line of a fenced code block.
    CodeFence,
    /// A line inside an open code or math fence.
    Verbatim,
    TableRow,
    TableSeparator,
    ListItem { ordered: bool },
    TaskItem { ordered: bool },
    Quote,
    Rule,
    /// A `$$` line: single-line formula, region opener or region closer.
    MathFence,
    Text,
}

impl LineKind {
    pub fn is_list(self) -> bool {
        matches!(self, LineKind::ListItem { .. } | LineKind::TaskItem { .. })
    }

    pub fn is_table(self) -> bool {
        matches!(self, LineKind::TableRow | LineKind::TableSeparator)
    }
}

/// Which verbatim region, if any, the previous lines left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Closed,
    Code(FenceKind),
    Math,
}

impl FenceState {
    /// The state after `line`, which was classified as `kind` in `self`.
    pub fn advance(self, line: &str, kind: LineKind) -> FenceState {
        match (self, kind) {
            (FenceState::Closed, LineKind::CodeFence) => CodeFence::open(line)
                .map(|(kind, _)| FenceState::Code(kind))
                .unwrap_or(FenceState::Closed),
            (FenceState::Closed, LineKind::MathFence) if MathFence::opens_region(line) => {
                FenceState::Math
            }
            (FenceState::Code(_), LineKind::CodeFence) | (FenceState::Math, LineKind::MathFence) => {
                FenceState::Closed
            }
            (state, _) => state,
        }
    }

    /// True when `kind` in this state ends the open region.
    pub fn is_closed_by(self, kind: LineKind) -> bool {
        matches!(
            (self, kind),
            (FenceState::Code(_), LineKind::CodeFence) | (FenceState::Math, LineKind::MathFence)
        )
    }
}

/// Classifies lines against the fence state left by the lines before them.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str, state: FenceState) -> LineKind {
        match state {
            FenceState::Code(kind) => {
                return if CodeFence::closes(kind, line) {
                    LineKind::CodeFence
                } else {
                    LineKind::Verbatim
                };
            }
            FenceState::Math => {
                return if MathFence::closes(line) {
                    LineKind::MathFence
                } else {
                    LineKind::Verbatim
                };
            }
            FenceState::Closed => {}
        }

        if line.trim().is_empty() {
            return LineKind::Empty;
        }
        if CodeFence::sig(line).is_some() {
            return LineKind::CodeFence;
        }
        if Heading::parse(line).is_some() {
            return LineKind::Heading;
        }
        if TableRow::is_separator(line) {
            return LineKind::TableSeparator;
        }
        if TableRow::is_framed(line) {
            return LineKind::TableRow;
        }
        if ThematicBreak::matches(line) {
            return LineKind::Rule;
        }
        if let Some(item) = ListMarker::parse(line) {
            return match item.task {
                Some(_) => LineKind::TaskItem {
                    ordered: item.ordered,
                },
                None => LineKind::ListItem {
                    ordered: item.ordered,
                },
            };
        }
        if MathFence::opens(line) {
            return LineKind::MathFence;
        }
        if BlockQuote::strip(line).is_some() {
            return LineKind::Quote;
        }
        LineKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Empty)]
    #[case("   ", LineKind::Empty)]
    #[case("```rust", LineKind::CodeFence)]
    #[case("## Heading", LineKind::Heading)]
    #[case("| a | b |", LineKind::TableRow)]
    #[case("|---|---|", LineKind::TableSeparator)]
    #[case("***", LineKind::Rule)]
    #[case("- item", LineKind::ListItem { ordered: false })]
    #[case("2. item", LineKind::ListItem { ordered: true })]
    #[case("- [x] done", LineKind::TaskItem { ordered: false })]
    #[case("$$x$$", LineKind::MathFence)]
    #[case("> quoted", LineKind::Quote)]
    #[case("just text", LineKind::Text)]
    #[case("a | b", LineKind::Text)]
    fn classify_closed(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(
            MarkdownLineClassifier.classify(line, FenceState::Closed),
            expected
        );
    }

    #[test]
    fn lines_inside_code_are_verbatim() {
        let state = FenceState::Code(FenceKind::Backticks);
        let c = MarkdownLineClassifier;
        assert_eq!(c.classify("# not a heading", state), LineKind::Verbatim);
        assert_eq!(c.classify("", state), LineKind::Verbatim);
        assert_eq!(c.classify("~~~", state), LineKind::Verbatim);
        assert_eq!(c.classify("```", state), LineKind::CodeFence);
    }

    #[test]
    fn lines_inside_math_are_verbatim() {
        let c = MarkdownLineClassifier;
        assert_eq!(c.classify("- x", FenceState::Math), LineKind::Verbatim);
        assert_eq!(c.classify("x $$", FenceState::Math), LineKind::MathFence);
    }

    #[test]
    fn fence_state_transitions() {
        let c = MarkdownLineClassifier;
        let mut state = FenceState::Closed;
        for (line, expected) in [
            ("```", FenceState::Code(FenceKind::Backticks)),
            ("code", FenceState::Code(FenceKind::Backticks)),
            ("```", FenceState::Closed),
            ("$$x$$", FenceState::Closed),
            ("$$", FenceState::Math),
            ("a", FenceState::Math),
            ("$$", FenceState::Closed),
        ] {
            let kind = c.classify(line, state);
            state = state.advance(line, kind);
            assert_eq!(state, expected, "after {line:?}");
        }
    }
}
