//! # Lexer - Tokenizing LaTeX Math
//!
//! First stage of parsing: breaking a formula into tokens using the [Logos]
//! lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! Every byte of the input appears in exactly one token, so the tree built
//! from these tokens reproduces the formula verbatim:
//!
//! ```
//! use docmark_tex::lexer::lex;
//!
//! let input = r"\frac{a}{b} + x^2";
//! let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! Tokens are context-free. The lexer does not know how many arguments
//! `\frac` takes or whether `[` opens an optional argument; that is the
//! grammar's job. Digits and letters are single-character tokens because
//! TeX scripts bind exactly one of them (`x^23` is `x^{2}3`).

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Logos derives on this enum; each variant maps to a `SyntaxKind` token
/// through [`TokenKind::to_syntax_kind`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"%[^\n]*")]
    Comment,

    /// Control word: backslash followed by letters
    #[regex(r"\\[a-zA-Z]+")]
    Command,

    /// Control symbol: backslash followed by one non-letter
    #[regex(r"\\[^a-zA-Z]")]
    ControlSymbol,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("^")]
    Caret,

    #[token("_")]
    Underscore,

    #[token("&")]
    Ampersand,

    #[regex(r"[0-9]")]
    Digit,

    #[regex(r"[a-zA-Z]")]
    Letter,

    #[token("'")]
    Prime,

    #[regex(r"[+\-*/=<>!,;:|().?]")]
    Operator,

    /// Any single non-ASCII character
    #[regex(r"[^\x00-\x7F]")]
    Other,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::Command => SyntaxKind::COMMAND,
            TokenKind::ControlSymbol => SyntaxKind::CONTROL_SYMBOL,
            TokenKind::LBrace => SyntaxKind::LBRACE,
            TokenKind::RBrace => SyntaxKind::RBRACE,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Caret => SyntaxKind::CARET,
            TokenKind::Underscore => SyntaxKind::UNDERSCORE,
            TokenKind::Ampersand => SyntaxKind::AMPERSAND,
            TokenKind::Digit => SyntaxKind::DIGIT,
            TokenKind::Letter => SyntaxKind::LETTER,
            TokenKind::Prime => SyntaxKind::PRIME,
            TokenKind::Operator => SyntaxKind::OPERATOR,
            TokenKind::Other => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind, text slice and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: usize,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognized ASCII (`~`, `"`, `$`, a trailing `\`) - treat as TEXT
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            offset: lexer.span().start,
        });
    }

    tokens
}
