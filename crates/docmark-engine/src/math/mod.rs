//! # Math
//!
//! ```text
//! LaTeX ──MathmlBackend──► MathML ──parse_mathml──► MathNode ──rewrite──► OmmlMath
//! ```
//!
//! The first stage sits behind [`MathmlBackend`]; [`TexBackend`] uses
//! `docmark-tex`. Any failure in either stage fails the formula as a whole.
//! Callers fall back to the LaTeX source in that case.

pub mod heuristic;
pub mod mathml;
pub mod node;
pub mod omml;

use thiserror::Error;

pub use docmark_tex::Display;
pub use heuristic::looks_like_math;
pub use mathml::parse_mathml;
pub use node::MathNode;
pub use omml::{OMML_NS, OmmlMath, OmmlNode};

#[derive(Debug, Error)]
pub enum MathError {
    #[error(transparent)]
    Tex(#[from] docmark_tex::TexError),

    #[error("MathML backend failed: {0}")]
    Backend(String),

    #[error("unreadable MathML: {0}")]
    Markup(#[from] roxmltree::Error),

    #[error("MathML nested deeper than {limit} elements")]
    TooDeep { limit: usize },
}

/// Turns LaTeX into a MathML `<math>` document.
pub trait MathmlBackend: Send + Sync {
    fn to_mathml(&self, latex: &str, display: Display) -> Result<String, MathError>;
}

/// The `docmark-tex` converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexBackend;

impl MathmlBackend for TexBackend {
    fn to_mathml(&self, latex: &str, display: Display) -> Result<String, MathError> {
        Ok(docmark_tex::latex_to_mathml(latex, display)?)
    }
}

pub struct MathTranspiler {
    backend: Box<dyn MathmlBackend>,
    depth_limit: usize,
}

impl MathTranspiler {
    pub fn new(depth_limit: usize) -> Self {
        Self::with_backend(Box::new(TexBackend), depth_limit)
    }

    pub fn with_backend(backend: Box<dyn MathmlBackend>, depth_limit: usize) -> Self {
        Self {
            backend,
            depth_limit,
        }
    }

    /// LaTeX to the intermediate tree.
    pub fn to_tree(&self, latex: &str, display: Display) -> Result<MathNode, MathError> {
        let markup = self.backend.to_mathml(latex, display)?;
        parse_mathml(&markup, self.depth_limit)
    }

    pub fn transpile(&self, latex: &str, display: Display) -> Result<OmmlMath, MathError> {
        Ok(OmmlMath::from_mathml(&self.to_tree(latex, display)?))
    }
}

impl std::fmt::Debug for MathTranspiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathTranspiler")
            .field("depth_limit", &self.depth_limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Canned(&'static str);

    impl MathmlBackend for Canned {
        fn to_mathml(&self, _latex: &str, _display: Display) -> Result<String, MathError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn quadratic_formula_round_trip() {
        let math = MathTranspiler::new(128)
            .transpile(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}", Display::Block)
            .unwrap();
        assert_eq!(math.linear_text(), "x=(-b±√(b^2-4ac))/2a");
        assert!(math.to_xml().contains("<m:f>"));
    }

    #[test]
    fn matrix_becomes_delimited_matrix() {
        let xml = MathTranspiler::new(128)
            .transpile(r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}", Display::Block)
            .unwrap()
            .to_xml();
        assert!(xml.contains(r#"<m:begChr m:val="("/>"#));
        assert_eq!(xml.matches("<m:mr>").count(), 2);
    }

    #[test]
    fn malformed_latex_fails() {
        assert!(matches!(
            MathTranspiler::new(128).transpile(r"\frac{a", Display::Inline),
            Err(MathError::Tex(_))
        ));
    }

    #[test]
    fn custom_backend_output_is_used() {
        let transpiler = MathTranspiler::with_backend(
            Box::new(Canned("<math><mi>q</mi></math>")),
            16,
        );
        assert_eq!(
            transpiler.transpile("anything", Display::Inline).unwrap().linear_text(),
            "q"
        );
    }

    #[test]
    fn backend_garbage_is_a_markup_error() {
        let transpiler = MathTranspiler::with_backend(Box::new(Canned("<math><mi>")), 16);
        assert!(matches!(
            transpiler.transpile("x", Display::Inline),
            Err(MathError::Markup(_))
        ));
    }
}
