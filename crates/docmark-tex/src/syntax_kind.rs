//! SyntaxKind enum for all tokens and nodes in the LaTeX math CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte of the formula appears as a token in the tree.

/// All syntax kinds for the LaTeX math CST.
///
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
/// SCREAMING_CASE follows the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// `%` comment up to the end of the line
    COMMENT,
    /// Control word, e.g. `\frac`
    COMMAND,
    /// Control symbol, e.g. `\{`, `\,` or `\\`
    CONTROL_SYMBOL,
    /// `{`
    LBRACE,
    /// `}`
    RBRACE,
    /// `[` (optional argument or plain bracket)
    LBRACKET,
    /// `]`
    RBRACKET,
    /// `^` superscript marker
    CARET,
    /// `_` subscript marker
    UNDERSCORE,
    /// `&` column separator
    AMPERSAND,
    /// A single decimal digit
    DIGIT,
    /// A single ASCII letter
    LETTER,
    /// `'` prime
    PRIME,
    /// Single-character ASCII operator or punctuation
    OPERATOR,
    /// Anything else (Greek letters typed directly, CJK, stray symbols)
    TEXT,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root of a formula
    ROOT,
    /// Braced group `{...}`
    GROUP,
    /// Bracketed optional argument `[...]`
    OPTION,
    /// A command together with its arguments
    COMMAND_CALL,
    /// A base with `^`/`_` attachments
    SCRIPT,
    /// `\begin{name} ... \end{name}`
    ENVIRONMENT,
    /// The `{name}` part of `\begin`/`\end`
    ENV_NAME,
    /// The content between `\begin{..}` and `\end{..}`
    ENV_BODY,
    /// `\left<delim> ... \right<delim>`
    LEFT_RIGHT,
    /// The content between `\left` and `\right`
    FENCE_BODY,

    /// Error recovery node
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace, newlines, comments).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::COMMENT)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TexLang {}

impl rowan::Language for TexLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<TexLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<TexLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<TexLang>;
