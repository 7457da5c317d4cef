use serde::{Deserialize, Serialize};

use crate::parsing::AlignmentPolicy;

/// Knobs for one conversion. Every field has a default so partial config
/// files deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Headings deeper than this are clamped to it.
    pub max_heading_level: u8,
    /// Alignment of table columns without `:` markers.
    pub table_alignment: AlignmentPolicy,
    /// Number display equations `(1)`, `(2)`, ...
    pub number_equations: bool,
    /// Maximum element depth accepted from the MathML stage.
    pub math_depth_limit: usize,
    pub strip_zero_width: bool,
    /// Rewrite `\(..\)` and `\[..\]` to dollar delimiters.
    pub convert_latex_delimiters: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_heading_level: 6,
            table_alignment: AlignmentPolicy::Left,
            number_equations: true,
            math_depth_limit: 128,
            strip_zero_width: true,
            convert_latex_delimiters: true,
        }
    }
}
