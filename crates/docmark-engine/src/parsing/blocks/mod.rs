//! # Block Parsing
//!
//! Two phases over normalized text:
//!
//! 1. **Line Classification** (`classify`): each line gets a [`LineKind`]
//!    against the [`FenceState`] left by the lines before it. The normalizer
//!    uses this to decide where blank lines belong.
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] scans the lines,
//!    trying the openers in `open` in a fixed precedence, and emits
//!    [`BlockNode`]s with 1-based line ranges.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`, `ListItem`
//! - **`kinds`**: one type per block syntax, owning its delimiters
//! - **`classify`**: `MarkdownLineClassifier`, `LineKind`, `FenceState`
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Every non-blank line lands in exactly one block, in order; a line split
//!   by a same-line formula lands in each of its pieces' blocks.
//! - `start_line` never decreases from one block to the next.
//! - Fenced code and math are raw zones: no block or inline parsing inside.
//! - Unterminated fences run to end of input.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{FenceState, LineKind, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ListItem, ListItemKind};
