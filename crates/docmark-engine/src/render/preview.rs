use std::fmt::Write;

use crate::math::Display;
use crate::parsing::Table;
use crate::parsing::blocks::{BlockKind, BlockNode};

use super::{BlockSink, Formula, ListNumbering, RenderContext, RunContent, Style, styled_runs};

const RULE_WIDTH: usize = 40;

/// Plain-text rendering for previews and terminals.
///
/// Blocks are separated by a blank line. Inline formulas appear in linear
/// form and failed ones as `_latex_`.
#[derive(Debug, Default)]
pub struct PreviewRenderer {
    out: String,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl BlockSink for PreviewRenderer {
    fn block(&mut self, block: &BlockNode, cx: &mut RenderContext<'_>) -> anyhow::Result<()> {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let out = &mut self.out;

        match &block.kind {
            BlockKind::Heading { level, text } => {
                writeln!(out, "{} {}", "#".repeat(usize::from(*level)), inline(text, cx))?;
            }
            BlockKind::Paragraph { text } => writeln!(out, "{}", inline(text, cx))?,
            BlockKind::CodeBlock { language, code } => {
                writeln!(out, "```{}", language.as_deref().unwrap_or_default())?;
                writeln!(out, "{code}")?;
                writeln!(out, "```")?;
            }
            BlockKind::MathBlock { latex } => {
                let shown = formula_text(cx.formula(latex, Display::Block));
                if cx.options.number_equations {
                    let n = cx.counters.next_equation();
                    writeln!(out, "    {shown}    ({n})")?;
                } else {
                    writeln!(out, "    {shown}")?;
                }
            }
            BlockKind::Table { raw } => match Table::parse(raw, cx.options.table_alignment) {
                Some(table) => {
                    writeln!(out, "Table {}", cx.counters.next_table())?;
                    let row = |cells: &[String]| {
                        cells
                            .iter()
                            .map(|c| inline(c, cx))
                            .collect::<Vec<_>>()
                            .join(" | ")
                    };
                    writeln!(out, "{}", row(&table.headers))?;
                    for cells in &table.rows {
                        writeln!(out, "{}", row(cells))?;
                    }
                }
                None => {
                    let joined = raw.lines().map(str::trim).collect::<Vec<_>>().join(" ");
                    writeln!(out, "{}", inline(&joined, cx))?;
                }
            },
            BlockKind::Quote { text } => {
                for line in text.lines() {
                    writeln!(out, "│ {}", inline(line, cx))?;
                }
            }
            BlockKind::List { ordered, items } => {
                let mut numbering = ListNumbering::new();
                for item in items {
                    let marker = numbering.marker(item, *ordered);
                    let indent = "    ".repeat(item.level);
                    writeln!(out, "  {indent}{marker} {}", inline(&item.text, cx))?;
                }
            }
            BlockKind::Image { alt, url } => {
                writeln!(out, "[image: {url}]")?;
                writeln!(out, "Figure {}: {alt}", cx.counters.next_figure())?;
            }
            BlockKind::Rule => writeln!(out, "{}", "─".repeat(RULE_WIDTH))?,
        }
        Ok(())
    }
}

fn formula_text(formula: Formula) -> String {
    match formula {
        Formula::Converted(math) => math.linear_text(),
        Formula::Fallback(latex) => format!("_{latex}_"),
    }
}

fn inline(text: &str, cx: &RenderContext<'_>) -> String {
    styled_runs(text, Style::PLAIN)
        .into_iter()
        .map(|run| match run.content {
            RunContent::Text { text } => text,
            RunContent::Code { code } => format!("`{code}`"),
            RunContent::Math { latex } => formula_text(cx.formula(&latex, Display::Inline)),
            RunContent::Link { text, url } => format!("{text} <{url}>"),
            RunContent::Image { alt, .. } => format!("[{alt}]"),
            RunContent::LineBreak => "\n".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MathTranspiler;
    use crate::options::ConvertOptions;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn preview_with(text: &str, options: &ConvertOptions) -> String {
        let transpiler = MathTranspiler::new(options.math_depth_limit);
        let mut cx = RenderContext::new(options, &transpiler);
        let mut renderer = PreviewRenderer::new();
        for block in parse_document(text).blocks {
            renderer.block(&block, &mut cx).unwrap();
        }
        renderer.into_string()
    }

    fn preview(text: &str) -> String {
        preview_with(text, &ConvertOptions::default())
    }

    #[test]
    fn headings_paragraphs_and_inline_math() {
        assert_eq!(
            preview("# Area\nIt is **$\\pi r^2$** or `pi*r*r`."),
            "# Area\n\nIt is πr^2 or `pi*r*r`.\n"
        );
    }

    #[test]
    fn equations_are_numbered() {
        assert_eq!(
            preview("$$x^2$$\n\n$$\\frac{a$$"),
            "    x^2    (1)\n\n    _\\frac{a_    (2)\n"
        );
    }

    #[test]
    fn equation_numbers_can_be_disabled() {
        let options = ConvertOptions {
            number_equations: false,
            ..ConvertOptions::default()
        };
        assert_eq!(preview_with("$$y$$", &options), "    y\n");
    }

    #[test]
    fn nested_ordered_list() {
        assert_eq!(
            preview("1. one\n  1. sub\n    1. deep\n2. two"),
            "  1. one\n      a) sub\n          i. deep\n  2. two\n"
        );
    }

    #[test]
    fn tasks_quotes_and_rules() {
        assert_eq!(
            preview("- [ ] todo\n- [x] done\n\n> a\n> b\n\n---"),
            format!("  ☐ todo\n  ☑ done\n\n│ a\n│ b\n\n{}\n", "─".repeat(RULE_WIDTH))
        );
    }

    #[test]
    fn table_with_caption() {
        assert_eq!(
            preview("| a | b |\n|---|---|\n| 1 | $x$ |"),
            "Table 1\na | b\n1 | x\n"
        );
    }

    #[test]
    fn image_with_caption() {
        assert_eq!(
            preview("![Plot](plot.png)"),
            "[image: plot.png]\nFigure 1: Plot\n"
        );
    }
}
