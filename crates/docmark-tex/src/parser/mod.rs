//! # Parser - Event-Based Tree Construction
//!
//! Transforms the token stream into a syntax tree using the event-based
//! architecture from rust-analyzer. Grammar rules emit a flat list of
//! [`Event`]s; the [`Sink`] builds the rowan tree from them afterwards.
//!
//! ## The Marker System
//!
//! `parser.start()` reserves a slot and returns a [`Marker`] which must be
//! either completed with a node kind or abandoned. Dropping it otherwise
//! panics, catching grammar bugs before they produce corrupt trees.
//!
//! ```ignore
//! let m = p.start();
//! p.bump(); // `{`
//! while !p.at_end() && !p.at(SyntaxKind::RBRACE) {
//!     item(p);
//! }
//! p.eat(SyntaxKind::RBRACE);
//! m.complete(p, SyntaxKind::GROUP);
//! ```
//!
//! ## Errors
//!
//! Grammar rules never fail. Malformed input (an unclosed group, a missing
//! argument, a stray `\right`) is recorded as a [`ParseError`] and the tree is
//! still built from every byte. Callers decide whether errors are fatal.

pub mod event;
pub mod sink;

mod grammar;

use rowan::GreenNode;
use thiserror::Error;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// Groups, environments and fences nested deeper than this are reported
/// instead of descended into.
pub const MAX_NESTING: usize = 256;

/// A recoverable syntax problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

/// Result of parsing a formula: the green tree plus any syntax errors.
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    errors: Vec<ParseError>,
    nesting_exceeded: bool,
}

impl Parse {
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when some construct went past [`MAX_NESTING`].
    pub fn nesting_exceeded(&self) -> bool {
        self.nesting_exceeded
    }
}

/// The parser state machine.
///
/// Grammar functions receive `&mut Parser` and use its methods to inspect
/// tokens (`current`, `nth`, `at`, `at_command`), consume them (`bump`,
/// `eat`, `skip_trivia`) and build structure (`start` → `Marker`).
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
    errors: Vec<ParseError>,
    depth: usize,
    nesting_exceeded: bool,
}

impl<'t, 'input> Parser<'t, 'input> {
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
            errors: Vec::new(),
            depth: 0,
            nesting_exceeded: false,
        }
    }

    /// Parse the tokens into a green tree and error list.
    pub fn parse(mut self) -> Parse {
        grammar::root(&mut self);
        let green = Sink::new(self.tokens, self.events).finish();
        Parse {
            green,
            errors: self.errors,
            nesting_exceeded: self.nesting_exceeded,
        }
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Kind of the next non-trivia token, without consuming anything.
    pub fn peek_significant(&self) -> SyntaxKind {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .map(|t| t.kind)
            .find(|k| !k.is_trivia())
            .unwrap_or(SyntaxKind::EOF)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// True when the current token is the control word `\name`.
    pub fn at_command(&self, name: &str) -> bool {
        self.at(SyntaxKind::COMMAND) && self.command_name() == name
    }

    /// Name of the current control word without its backslash.
    pub fn command_name(&self) -> &'input str {
        self.current_text().get(1..).unwrap_or("")
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if !self.at_end() {
            let kind = self.current();
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume whitespace, newlines and comments.
    pub fn skip_trivia(&mut self) {
        while self.current().is_trivia() {
            self.bump();
        }
    }

    /// Text of the current token.
    pub fn current_text(&self) -> &'input str {
        self.tokens.get(self.pos).map(|t| t.text).unwrap_or("")
    }

    /// Record an error at the current token.
    pub fn error(&mut self, message: impl Into<String>) {
        let offset = match self.tokens.get(self.pos) {
            Some(t) => t.offset,
            None => self
                .tokens
                .last()
                .map(|t| t.offset + t.text.len())
                .unwrap_or(0),
        };
        self.errors.push(ParseError {
            message: message.into(),
            offset,
        });
    }

    /// Record an error and wrap the current token in an ERROR node.
    pub fn err_and_bump(&mut self, message: impl Into<String>) {
        self.error(message);
        let m = self.start();
        self.bump();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Enter a nested construct; false once [`MAX_NESTING`] is exceeded.
    pub fn enter(&mut self) -> bool {
        if self.depth >= MAX_NESTING {
            self.nesting_exceeded = true;
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// A marker for a node being constructed.
///
/// `parser.start()` pushes a `Placeholder` event and hands out a `Marker`
/// pointing to it. The marker must be completed (placeholder becomes `Start`,
/// a `Finish` is pushed) or abandoned (placeholder removed or left inert).
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    pos: usize,
    completed: bool,
}

impl Marker {
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
    }

    /// Abandon this marker without creating a node.
    ///
    /// If other events were pushed after `start()`, the placeholder stays
    /// and the Sink ignores it, so those tokens land in the enclosing node.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// Parse a LaTeX formula into a syntax tree.
pub fn parse(source: &str) -> Parse {
    let tokens = lex(source);
    Parser::new(&tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_input() {
        let parse = parse("");
        assert!(parse.is_ok());
        assert_eq!(parse.syntax().kind(), SyntaxKind::ROOT);
        assert_eq!(parse.syntax().children().count(), 0);
    }

    #[test]
    fn parse_preserves_all_text() {
        let input = r"\frac{1}{2} + \sqrt[3]{x}";
        assert_eq!(parse(input).syntax().text().to_string(), input);
    }

    #[test]
    fn errors_carry_offsets() {
        let parse = parse("{a");
        assert_eq!(
            parse.errors(),
            &[ParseError {
                message: "unclosed `{`".to_string(),
                offset: 2,
            }]
        );
    }

    #[test]
    fn nesting_overflow_is_flagged() {
        let deep = format!("{}x{}", "{".repeat(MAX_NESTING + 1), "}".repeat(MAX_NESTING + 1));
        assert!(parse(&deep).nesting_exceeded());
        assert!(!parse("{{x}}").nesting_exceeded());
    }

    #[test]
    fn marker_must_be_completed() {
        let result = std::panic::catch_unwind(|| {
            let tokens = lex("x");
            let mut parser = Parser::new(&tokens);
            let _marker = parser.start();
        });
        assert!(result.is_err());
    }

    #[test]
    fn marker_can_be_abandoned() {
        let tokens = lex("x");
        let mut parser = Parser::new(&tokens);
        let marker = parser.start();
        marker.abandon(&mut parser);
    }
}
