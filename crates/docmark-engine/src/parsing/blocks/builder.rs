use super::{
    kinds::{BlockQuote, CodeFence, FenceKind, ListMarker, MathFence, Paragraph, TableRow},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode, ListItem, ListItemKind},
};

/// Splits normalized text into blocks with a single forward scan.
///
/// Each position tries the openers of [`try_open_leaf`] in precedence order;
/// lines that open nothing accumulate into a paragraph. A single-line
/// formula followed by more text rewrites its line to that remainder and
/// scans it again, so `$$a$$$$b$$` yields two math blocks.
pub struct BlockBuilder<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    max_heading_level: u8,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(text: &'a str, max_heading_level: u8) -> Self {
        Self {
            lines: text.split('\n').collect(),
            pos: 0,
            max_heading_level: max_heading_level.max(1),
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        while self.pos < self.lines.len() {
            self.step();
        }
        self.out
    }

    fn step(&mut self) {
        let line = self.lines[self.pos];
        if line.trim().is_empty() {
            self.pos += 1;
            return;
        }

        let next = self.lines.get(self.pos + 1).copied();
        match try_open_leaf(line, next) {
            Some(open) => self.open_leaf(open),
            None => self.consume_paragraph(),
        }
    }

    /// Records a block spanning `start..=end` (0-based line indexes).
    fn emit(&mut self, kind: BlockKind, start: usize, end: usize) {
        self.out.push(BlockNode {
            kind,
            start_line: start + 1,
            end_line: end + 1,
        });
    }

    fn open_leaf(&mut self, open: BlockOpen<'a>) {
        let start = self.pos;
        match open {
            BlockOpen::FencedCode { kind, info } => self.consume_fence(kind, info),
            BlockOpen::Table => self.consume_table(),
            BlockOpen::InlineMath { latex, rest } => {
                self.emit(
                    BlockKind::MathBlock {
                        latex: latex.trim().to_string(),
                    },
                    start,
                    start,
                );
                if rest.trim().is_empty() {
                    self.pos += 1;
                } else {
                    self.lines[self.pos] = rest;
                }
            }
            BlockOpen::MathRegion { first } => self.consume_math_region(first),
            BlockOpen::Heading { level, text } => {
                let level = level.min(usize::from(self.max_heading_level)) as u8;
                self.emit(
                    BlockKind::Heading {
                        level,
                        text: text.to_string(),
                    },
                    start,
                    start,
                );
                self.pos += 1;
            }
            BlockOpen::Quote => self.consume_quote(),
            BlockOpen::List { ordered } => self.consume_list(ordered),
            BlockOpen::Rule => {
                self.emit(BlockKind::Rule, start, start);
                self.pos += 1;
            }
            BlockOpen::Image { alt, url } => {
                self.emit(
                    BlockKind::Image {
                        alt: alt.to_string(),
                        url: url.to_string(),
                    },
                    start,
                    start,
                );
                self.pos += 1;
            }
        }
    }

    /// Scans to the matching close, or to end of input when there is none.
    fn consume_fence(&mut self, kind: FenceKind, info: &str) {
        let start = self.pos;
        let mut end = start;
        let mut code = vec![];
        let mut i = start + 1;
        while i < self.lines.len() {
            end = i;
            if CodeFence::closes(kind, self.lines[i]) {
                break;
            }
            code.push(self.lines[i]);
            i += 1;
        }

        self.emit(
            BlockKind::CodeBlock {
                language: (!info.is_empty()).then(|| info.to_string()),
                code: code.join("\n"),
            },
            start,
            end,
        );
        self.pos = end + 1;
    }

    fn consume_table(&mut self) {
        let start = self.pos;
        let mut end = start;
        while end + 1 < self.lines.len() && TableRow::has_delimiter(self.lines[end + 1]) {
            end += 1;
        }

        self.emit(
            BlockKind::Table {
                raw: self.lines[start..=end].join("\n"),
            },
            start,
            end,
        );
        self.pos = end + 1;
    }

    fn consume_math_region(&mut self, first: &str) {
        let start = self.pos;
        let first = first.trim();

        // `$$$$`: opened and closed on the same line.
        if let Some(body) = first.strip_suffix(MathFence::DELIMITER) {
            self.emit(
                BlockKind::MathBlock {
                    latex: body.trim().to_string(),
                },
                start,
                start,
            );
            self.pos += 1;
            return;
        }

        let mut body = vec![];
        if !first.is_empty() {
            body.push(first);
        }

        let mut end = start;
        let mut i = start + 1;
        while i < self.lines.len() {
            end = i;
            let line = self.lines[i];
            if MathFence::closes(line) {
                let t = line.trim();
                let last = &t[..t.len() - MathFence::DELIMITER.len()];
                if !last.trim().is_empty() {
                    body.push(last);
                }
                break;
            }
            body.push(line);
            i += 1;
        }

        self.emit(
            BlockKind::MathBlock {
                latex: body.join("\n").trim().to_string(),
            },
            start,
            end,
        );
        self.pos = end + 1;
    }

    fn consume_quote(&mut self) {
        let start = self.pos;
        let mut lines = vec![];
        while let Some(text) = self.lines.get(self.pos).copied().and_then(BlockQuote::strip) {
            lines.push(text);
            self.pos += 1;
        }
        self.emit(
            BlockKind::Quote {
                text: lines.join("\n"),
            },
            start,
            self.pos - 1,
        );
    }

    /// Consumes items while the marker type stays the same.
    fn consume_list(&mut self, ordered: bool) {
        let start = self.pos;
        let mut items = vec![];
        while let Some(marker) = self.lines.get(self.pos).copied().and_then(ListMarker::parse) {
            if marker.ordered != ordered {
                break;
            }
            items.push(ListItem {
                level: marker.level(),
                kind: match marker.task {
                    Some(checked) => ListItemKind::Task { checked },
                    None => ListItemKind::Item,
                },
                text: marker.text.to_string(),
            });
            self.pos += 1;
        }
        self.emit(BlockKind::List { ordered, items }, start, self.pos - 1);
    }

    /// The first line is always taken; later lines stop at a blank line or
    /// at anything that opens a block.
    fn consume_paragraph(&mut self) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            let next = self.lines.get(self.pos + 1).copied();
            if line.trim().is_empty() || try_open_leaf(line, next).is_some() {
                break;
            }
            self.pos += 1;
        }

        self.emit(
            BlockKind::Paragraph {
                text: Paragraph::join(self.lines[start..self.pos].iter().copied()),
            },
            start,
            self.pos - 1,
        );
    }
}
