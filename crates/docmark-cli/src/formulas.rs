//! `--format omml`: every formula of the document with its OMML.

use docmark_engine::render::{RunContent, Style, styled_runs};
use docmark_engine::{BlockKind, BlockNode, BlockSink, Display, Formula, RenderContext, Table};

/// One converted (or failed) formula and the block line it came from.
#[derive(Debug)]
pub struct FormulaEntry {
    pub line: usize,
    pub display: Display,
    pub formula: Formula,
}

impl FormulaEntry {
    pub fn to_line(&self) -> String {
        let mode = match self.display {
            Display::Block => "block",
            Display::Inline => "inline",
        };
        match &self.formula {
            Formula::Converted(math) => format!("{}\t{mode}\t{}", self.line, math.to_xml()),
            Formula::Fallback(latex) => format!("{}\t{mode}\tfallback: {latex}", self.line),
        }
    }
}

#[derive(Debug, Default)]
pub struct FormulaCollector {
    pub entries: Vec<FormulaEntry>,
}

impl BlockSink for FormulaCollector {
    fn block(&mut self, block: &BlockNode, cx: &mut RenderContext<'_>) -> anyhow::Result<()> {
        let line = block.start_line;
        let texts = match &block.kind {
            BlockKind::MathBlock { latex } => {
                self.entries.push(FormulaEntry {
                    line,
                    display: Display::Block,
                    formula: cx.formula(latex, Display::Block),
                });
                return Ok(());
            }
            BlockKind::Heading { text, .. }
            | BlockKind::Paragraph { text }
            | BlockKind::Quote { text } => vec![text.clone()],
            BlockKind::List { items, .. } => items.iter().map(|i| i.text.clone()).collect(),
            BlockKind::Table { raw } => match Table::parse(raw, cx.options.table_alignment) {
                Some(table) => table
                    .headers
                    .into_iter()
                    .chain(table.rows.into_iter().flatten())
                    .collect(),
                None => raw.lines().map(str::to_string).collect(),
            },
            BlockKind::CodeBlock { .. } | BlockKind::Image { .. } | BlockKind::Rule => vec![],
        };

        for text in texts {
            for run in styled_runs(&text, Style::PLAIN) {
                if let RunContent::Math { latex } = run.content {
                    self.entries.push(FormulaEntry {
                        line,
                        display: Display::Inline,
                        formula: cx.formula(&latex, Display::Inline),
                    });
                }
            }
        }
        Ok(())
    }
}
