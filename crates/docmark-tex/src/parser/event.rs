//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree
//! building. The grammar emits a flat sequence of them and the
//! [`Sink`](super::sink::Sink) replays it into a rowan tree:
//!
//! ```text
//! Start(COMMAND_CALL)    \frac{a}{b}
//!   Token(COMMAND)
//!   Start(GROUP)
//!     Token(LBRACE)
//!     Token(LETTER)
//!     Token(RBRACE)
//!   Finish
//!   ...
//! Finish
//! ```

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Add the next lexer token to the current node.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    Finish,

    /// Reserved slot from `parser.start()`; replaced on completion and
    /// ignored by the Sink when the marker is abandoned.
    Placeholder,
}

impl Event {
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_constructors() {
        assert_eq!(
            Event::start(SyntaxKind::GROUP),
            Event::Start {
                kind: SyntaxKind::GROUP
            }
        );
        assert_eq!(
            Event::token(SyntaxKind::LETTER),
            Event::Token {
                kind: SyntaxKind::LETTER
            }
        );
    }
}
