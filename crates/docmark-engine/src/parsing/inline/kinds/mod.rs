//! # Inline Kinds
//!
//! One type per inline syntax, each owning its delimiters. The scanner in
//! `parser` asks these types whether a construct starts at the cursor and
//! where it ends; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod html_tag;
pub mod link;
pub mod math_span;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use html_tag::HtmlTag;
pub use link::Link;
pub use math_span::MathSpan;
