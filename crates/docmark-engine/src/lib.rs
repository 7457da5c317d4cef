pub mod convert;
pub mod diagnostics;
pub mod math;
pub mod options;
pub mod outline;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::{CancelToken, ConvertError, Converter, Progress};
pub use diagnostics::{Diagnostic, Issue, check};
pub use math::{Display, MathError, MathTranspiler, MathmlBackend, OmmlMath, looks_like_math};
pub use options::ConvertOptions;
pub use outline::{OutlineEntry, outline};
pub use parsing::blocks::{BlockKind, BlockNode, ListItem, ListItemKind};
pub use parsing::inline::{InlineKind, InlineNode, parse_inline};
pub use parsing::{AlignmentPolicy, ParsedDoc, Table, normalize, parse_document, split_cells};
pub use render::{BlockSink, Counters, Formula, PreviewRenderer, RenderContext};
