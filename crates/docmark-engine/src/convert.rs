//! The conversion driver: text in, blocks out to a [`BlockSink`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use thiserror::Error;

use crate::math::{Display, MathError, MathTranspiler, OmmlMath};
use crate::options::ConvertOptions;
use crate::parsing::{ParsedDoc, parse_document_with};
use crate::render::{BlockSink, RenderContext};

/// Longest block excerpt carried by [`ConvertError::Block`].
pub const SNIPPET_CHARS: usize = 180;

/// Cooperative cancellation flag, checked between blocks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Reported before each block is rendered. `index` is 0-based, `line`
/// is the block's first source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
    pub kind: &'static str,
    pub line: usize,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("conversion cancelled")]
    Cancelled,

    #[error("failed to render {kind} block at line {line}: {source} (near {snippet:?})")]
    Block {
        kind: &'static str,
        line: usize,
        snippet: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug)]
pub struct Converter {
    options: ConvertOptions,
    transpiler: MathTranspiler,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let transpiler = MathTranspiler::new(options.math_depth_limit);
        Self::with_transpiler(options, transpiler)
    }

    pub fn with_transpiler(options: ConvertOptions, transpiler: MathTranspiler) -> Self {
        Self {
            options,
            transpiler,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn parse(&self, text: &str) -> ParsedDoc {
        parse_document_with(text, &self.options)
    }

    pub fn transpile(&self, latex: &str, display: Display) -> Result<OmmlMath, MathError> {
        self.transpiler.transpile(latex, display)
    }

    /// Parses `text` and feeds every block to `sink`, then calls
    /// [`BlockSink::finish`].
    ///
    /// `cancel` is polled before each block. A failing block aborts the
    /// conversion with its kind, source line and a content snippet.
    pub fn render<S: BlockSink + ?Sized>(
        &self,
        text: &str,
        sink: &mut S,
        cancel: &CancelToken,
        mut progress: Option<&mut dyn FnMut(&Progress)>,
    ) -> Result<(), ConvertError> {
        let doc = self.parse(text);
        let total = doc.blocks.len();
        let mut cx = RenderContext::new(&self.options, &self.transpiler);

        for (index, block) in doc.blocks.iter().enumerate() {
            if cancel.is_cancelled() {
                info!("Conversion cancelled before block {}/{total}", index + 1);
                return Err(ConvertError::Cancelled);
            }

            let report = Progress {
                index,
                total,
                kind: block.kind.name(),
                line: block.start_line,
            };
            debug!(
                "Rendering {} block {}/{total} (line {})",
                report.kind,
                index + 1,
                report.line
            );
            if let Some(progress) = progress.as_mut() {
                progress(&report);
            }

            sink.block(block, &mut cx)
                .map_err(|source| ConvertError::Block {
                    kind: report.kind,
                    line: report.line,
                    snippet: block.snippet(SNIPPET_CHARS),
                    source: source.into(),
                })?;
        }

        sink.finish(&mut cx).map_err(|source| ConvertError::Block {
            kind: "document",
            line: doc.blocks.last().map_or(0, |b| b.end_line),
            snippet: String::new(),
            source: source.into(),
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockNode;
    use pretty_assertions::assert_eq;

    /// Records block kinds; fails on code blocks.
    #[derive(Default)]
    struct Recorder {
        kinds: Vec<&'static str>,
        finished: bool,
    }

    impl BlockSink for Recorder {
        fn block(&mut self, block: &BlockNode, _cx: &mut RenderContext<'_>) -> anyhow::Result<()> {
            if block.kind.name() == "code_block" {
                anyhow::bail!("code is not supported here");
            }
            self.kinds.push(block.kind.name());
            Ok(())
        }

        fn finish(&mut self, _cx: &mut RenderContext<'_>) -> anyhow::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn reports_progress_for_every_block() {
        let mut seen = vec![];
        let mut on_progress = |p: &Progress| seen.push((p.index, p.total, p.kind, p.line));
        let mut sink = Recorder::default();

        Converter::default()
            .render(
                "# T\ntext\n\n- a",
                &mut sink,
                &CancelToken::new(),
                Some(&mut on_progress),
            )
            .unwrap();

        assert_eq!(
            seen,
            vec![(0, 3, "heading", 1), (1, 3, "paragraph", 2), (2, 3, "list", 4)]
        );
        assert!(sink.finished);
    }

    #[test]
    fn cancelled_before_first_block() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut sink = Recorder::default();

        let result = Converter::default().render("# T", &mut sink, &cancel, None);

        assert!(matches!(result, Err(ConvertError::Cancelled)));
        assert!(sink.kinds.is_empty());
        assert!(!sink.finished);
    }

    #[test]
    fn cancellation_is_polled_between_blocks() {
        let cancel = CancelToken::new();
        let trigger = cancel.clone();
        let mut on_progress = |p: &Progress| {
            if p.index == 1 {
                trigger.cancel();
            }
        };
        let mut sink = Recorder::default();

        let result = Converter::default().render(
            "one\n\ntwo\n\nthree",
            &mut sink,
            &cancel,
            Some(&mut on_progress),
        );

        assert!(matches!(result, Err(ConvertError::Cancelled)));
        assert_eq!(sink.kinds, vec!["paragraph", "paragraph"]);
    }

    #[test]
    fn sink_failure_names_block_line_and_snippet() {
        let mut sink = Recorder::default();
        let err = Converter::default()
            .render(
                "intro\n```rust\nfn main() {\n    run();\n}\n```",
                &mut sink,
                &CancelToken::new(),
                None,
            )
            .unwrap_err();

        match err {
            ConvertError::Block {
                kind,
                line,
                snippet,
                source,
            } => {
                assert_eq!(kind, "code_block");
                assert_eq!(line, 2);
                assert_eq!(snippet, "fn main() { run(); }");
                assert_eq!(source.to_string(), "code is not supported here");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
