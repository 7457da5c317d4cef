//! # Rendering
//!
//! Renderers implement [`BlockSink`] and receive blocks one at a time from
//! [`crate::Converter::render`], together with a [`RenderContext`] that
//! holds everything shared across blocks of one conversion: options,
//! numbering [`Counters`] and the math transpiler.
//!
//! [`PreviewRenderer`] is the plain-text renderer shipped with the engine.

pub mod numbering;
pub mod preview;
pub mod styled;

use log::warn;

use crate::math::{Display, MathTranspiler, OmmlMath};
use crate::options::ConvertOptions;
use crate::parsing::blocks::BlockNode;

pub use numbering::ListNumbering;
pub use preview::PreviewRenderer;
pub use styled::{RunContent, Style, StyledRun, plain_text, styled_runs};

/// A formula after conversion. Fallbacks carry the LaTeX source, which
/// renderers show as italic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Converted(OmmlMath),
    Fallback(String),
}

/// Numbers handed out during one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub equation: usize,
    pub figure: usize,
    pub table: usize,
}

impl Counters {
    pub fn next_equation(&mut self) -> usize {
        self.equation += 1;
        self.equation
    }

    pub fn next_figure(&mut self) -> usize {
        self.figure += 1;
        self.figure
    }

    pub fn next_table(&mut self) -> usize {
        self.table += 1;
        self.table
    }
}

#[derive(Debug)]
pub struct RenderContext<'a> {
    pub options: &'a ConvertOptions,
    pub counters: Counters,
    transpiler: &'a MathTranspiler,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a ConvertOptions, transpiler: &'a MathTranspiler) -> Self {
        Self {
            options,
            counters: Counters::default(),
            transpiler,
        }
    }

    /// Converts one formula, falling back to its source on any failure.
    pub fn formula(&self, latex: &str, display: Display) -> Formula {
        match self.transpiler.transpile(latex, display) {
            Ok(math) => Formula::Converted(math),
            Err(e) => {
                warn!("Formula {latex:?} left as text: {e}");
                Formula::Fallback(latex.to_string())
            }
        }
    }
}

/// Receives the blocks of a document in order.
pub trait BlockSink {
    fn block(&mut self, block: &BlockNode, cx: &mut RenderContext<'_>) -> anyhow::Result<()>;

    /// Called once after the last block.
    fn finish(&mut self, _cx: &mut RenderContext<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}
