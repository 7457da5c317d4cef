pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list_marker;
pub mod math_fence;
pub mod paragraph;
pub mod table_row;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use image::StandaloneImage;
pub use list_marker::ListMarker;
pub use math_fence::MathFence;
pub use paragraph::Paragraph;
pub use table_row::TableRow;
pub use thematic_break::ThematicBreak;
