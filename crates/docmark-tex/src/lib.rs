//! # docmark-tex
//!
//! A lossless syntax tree for LaTeX math using [Rowan] + [Logos], following
//! the [rust-analyzer] architecture model, and a MathML emitter on top of it.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Architecture Overview
//!
//! ```text
//! Formula → Lexer → Tokens → Parser → Events → Sink → Rowan Tree → MathML
//!           (Logos)          (Grammar)        (GreenNodeBuilder)  (mathml)
//! ```
//!
//! The tree keeps every byte of the formula. Syntax problems are collected
//! as [`ParseError`]s next to the tree rather than aborting the parse; the
//! MathML emitter treats any of them as a failure of the whole formula.
//!
//! ## Module Structure
//!
//! ```text
//! docmark-tex/
//! ├── lib.rs           # Public API and integration tests
//! ├── syntax_kind.rs   # SyntaxKind enum (tokens + nodes) and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! ├── commands.rs      # Control word table (arity and meaning)
//! ├── mathml.rs        # CST → MathML presentation markup
//! ├── error.rs         # TexError
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, public parse() function
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to a Rowan GreenNode
//!     └── grammar/     # Groups, commands, scripts, environments, fences
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use docmark_tex::{Display, latex_to_mathml, parse, SyntaxKind};
//!
//! let tree = parse(r"\frac{a}{b}").syntax();
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//! assert_eq!(tree.text().to_string(), r"\frac{a}{b}");
//!
//! let mathml = latex_to_mathml("x^2", Display::Inline).unwrap();
//! assert!(mathml.contains("<msup><mi>x</mi><mn>2</mn></msup>"));
//! ```

pub mod commands;
pub mod error;
pub mod lexer;
pub mod mathml;
pub mod parser;
pub mod syntax_kind;

pub use error::TexError;
pub use mathml::{Display, MATHML_NS, latex_to_mathml};
pub use parser::{Parse, ParseError, parse};
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TexLang};
