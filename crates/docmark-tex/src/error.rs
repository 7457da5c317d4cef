use thiserror::Error;

use crate::parser::ParseError;

/// Failure to turn a LaTeX formula into MathML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TexError {
    #[error("invalid LaTeX: {0}")]
    Syntax(#[from] ParseError),

    #[error("formula nested deeper than {limit} groups")]
    TooDeep { limit: usize },
}
