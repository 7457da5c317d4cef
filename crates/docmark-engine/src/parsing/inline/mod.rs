//! # Inline Parsing
//!
//! A cursor-based scanner over one block's raw text.
//!
//! At each position the rules of [`InlineRule::PRECEDENCE`] are tried in
//! order (image, link, code, math, `<br>`, `<sup>`, `<sub>`, bold-italic,
//! bold, italic, strikethrough); the first that matches consumes its
//! markup, and bytes that start no rule accumulate into text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` and `InlineKind`
//! - **`kinds`**: one type per inline syntax, owning its delimiters
//! - **`cursor`**: `Cursor` for byte scanning with position tracking
//! - **`parser`**: `InlineRule` and the `parse_inline()` entry point
//!
//! ## Raw Zones
//!
//! Code and math spans suppress other parsing inside them, as do link labels
//! and urls. Emphasis content is returned unparsed so that callers can
//! re-tokenize it with their accumulated style.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlineRule, parse_inline};
pub use types::{InlineKind, InlineNode};
