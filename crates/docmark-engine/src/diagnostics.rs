//! Advisory checks run before conversion.
//!
//! The parser never fails on structural problems: an unclosed fence runs to
//! the end of the document and ragged table rows are taken as written.
//! [`check`] points those places out so a user can fix the source first.

use std::fmt;

use serde::Serialize;

use crate::options::ConvertOptions;
use crate::parsing::blocks::kinds::TableRow;
use crate::parsing::blocks::{BlockKind, FenceState, MarkdownLineClassifier};
use crate::parsing::preprocess::preprocess;
use crate::parsing::{parse_document_with, split_cells};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    UnterminatedCodeFence,
    UnterminatedMath,
    RaggedRow { expected: usize, found: usize },
    SeparatorWidth { expected: usize, found: usize },
}

/// One finding. `line` is 1-based in the checked text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub issue: Issue,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match self.issue {
            Issue::UnterminatedCodeFence => {
                write!(f, "code fence is never closed; the rest of the document is code")
            }
            Issue::UnterminatedMath => {
                write!(f, "`$$` block is never closed; the rest of the document is math")
            }
            Issue::RaggedRow { expected, found } => {
                write!(f, "table row has {found} cells, header has {expected}")
            }
            Issue::SeparatorWidth { expected, found } => {
                write!(f, "table separator has {found} cells, header has {expected}")
            }
        }
    }
}

/// Scans `text` and returns findings ordered by line.
pub fn check(text: &str) -> Vec<Diagnostic> {
    let options = ConvertOptions::default();
    let mut out = unclosed_fences(&preprocess(text, &options));

    for block in parse_document_with(text, &options).blocks {
        if let BlockKind::Table { raw } = &block.kind {
            table_widths(raw, block.start_line, &mut out);
        }
    }

    out.sort_by_key(|d| d.line);
    out
}

fn unclosed_fences(text: &str) -> Vec<Diagnostic> {
    let classifier = MarkdownLineClassifier;
    let mut state = FenceState::Closed;
    let mut opened_at = 0;

    for (i, line) in text.split('\n').enumerate() {
        let kind = classifier.classify(line, state);
        let next = state.advance(line, kind);
        if state == FenceState::Closed && next != FenceState::Closed {
            opened_at = i + 1;
        }
        state = next;
    }

    let issue = match state {
        FenceState::Closed => return vec![],
        FenceState::Code(_) => Issue::UnterminatedCodeFence,
        FenceState::Math => Issue::UnterminatedMath,
    };
    vec![Diagnostic {
        line: opened_at,
        issue,
    }]
}

/// Table lines are contiguous, so row `i` sits on `start_line + i`.
fn table_widths(raw: &str, start_line: usize, out: &mut Vec<Diagnostic>) {
    let mut lines = raw.lines().map(str::trim);
    let Some(expected) = lines.next().map(|header| split_cells(header).len()) else {
        return;
    };

    for (i, line) in lines.enumerate() {
        let found = split_cells(line).len();
        if found == expected || line.is_empty() {
            continue;
        }
        let issue = if i == 0 && TableRow::is_separator(line) {
            Issue::SeparatorWidth { expected, found }
        } else {
            Issue::RaggedRow { expected, found }
        };
        out.push(Diagnostic {
            line: start_line + i + 1,
            issue,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_document_has_no_findings() {
        assert!(check("# T\n\n```\ncode\n```\n\n$$\nx\n$$\n\n| a | b |\n|---|---|\n| 1 | 2 |").is_empty());
    }

    #[test]
    fn unterminated_code_fence() {
        assert_eq!(
            check("text\n\n```rust\nfn main() {}"),
            vec![Diagnostic {
                line: 3,
                issue: Issue::UnterminatedCodeFence
            }]
        );
    }

    #[test]
    fn unterminated_math_region() {
        let found = check("intro\n$$\nx + y\n");
        assert_eq!(
            found,
            vec![Diagnostic {
                line: 2,
                issue: Issue::UnterminatedMath
            }]
        );
        assert_eq!(
            found[0].to_string(),
            "line 2: `$$` block is never closed; the rest of the document is math"
        );
    }

    #[test]
    fn single_line_formulas_are_not_regions() {
        assert!(check("$$a$$\n$$b$$$$c$$").is_empty());
    }

    #[test]
    fn ragged_rows_and_narrow_separator() {
        assert_eq!(
            check("before\n\n| a | b | c |\n|---|---|\n| 1 | 2 | 3 |\n| 4 |"),
            vec![
                Diagnostic {
                    line: 4,
                    issue: Issue::SeparatorWidth {
                        expected: 3,
                        found: 2
                    }
                },
                Diagnostic {
                    line: 6,
                    issue: Issue::RaggedRow {
                        expected: 3,
                        found: 1
                    }
                },
            ]
        );
    }
}
