//! Command table: what each control word means and how many arguments it takes.
//!
//! The grammar asks [`arity`] while building the tree; the MathML emitter asks
//! [`lookup`] while walking it. Unknown commands have no arguments and are
//! emitted as an error marker carrying their name.

/// Meaning of a known control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Single identifier glyph (`\alpha`, `\infty`).
    Identifier(&'static str),
    /// Single operator glyph (`\times`, `\leq`, `\to`).
    Operator(&'static str),
    /// Upright function name (`\sin`, `\lim`); `limits` puts scripts above/below.
    Function { limits: bool },
    /// Large operator (`\sum`, `\int`).
    LargeOperator { glyph: &'static str, limits: bool },
    /// `\frac` and friends.
    Fraction,
    /// `\binom`.
    Binomial,
    /// `\sqrt` with optional index.
    Root,
    /// Accent drawn above its argument.
    Accent(&'static str),
    /// Mark drawn below its argument.
    UnderMark(&'static str),
    /// `\overset{top}{base}` / `\stackrel`.
    OverSet,
    /// `\underset{bottom}{base}`.
    UnderSet,
    /// Text-mode argument (`\text`, `\mbox`).
    Text,
    /// Font switch with a MathML `mathvariant`.
    Font(&'static str),
    /// `\operatorname{name}`.
    OperatorName,
    /// Horizontal space of the given width.
    Space(&'static str),
    /// Layout hints with no visible output (`\displaystyle`, `\limits`).
    Ignored,
}

/// Argument shape of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Arity {
    pub optional: bool,
    pub required: u8,
}

impl CommandKind {
    pub fn arity(self) -> Arity {
        let (optional, required) = match self {
            CommandKind::Fraction | CommandKind::Binomial => (false, 2),
            CommandKind::OverSet | CommandKind::UnderSet => (false, 2),
            CommandKind::Root => (true, 1),
            CommandKind::Accent(_)
            | CommandKind::UnderMark(_)
            | CommandKind::Text
            | CommandKind::Font(_)
            | CommandKind::OperatorName => (false, 1),
            _ => (false, 0),
        };
        Arity { optional, required }
    }
}

/// Argument shape of `name` (without the backslash).
pub fn arity(name: &str) -> Arity {
    lookup(name).map(CommandKind::arity).unwrap_or_default()
}

/// Looks up a control word by name (without the backslash).
pub fn lookup(name: &str) -> Option<CommandKind> {
    use CommandKind::*;

    if let Some(glyph) = greek(name) {
        return Some(Identifier(glyph));
    }

    let kind = match name {
        "frac" | "dfrac" | "tfrac" | "cfrac" => Fraction,
        "binom" | "dbinom" | "tbinom" => Binomial,
        "sqrt" => Root,
        "overset" | "stackrel" => OverSet,
        "underset" => UnderSet,
        "text" | "textrm" | "textnormal" | "mbox" | "textit" | "textbf" => Text,
        "operatorname" => OperatorName,

        "mathbb" => Font("double-struck"),
        "mathbf" | "boldsymbol" | "bm" => Font("bold"),
        "mathit" => Font("italic"),
        "mathrm" => Font("normal"),
        "mathcal" => Font("script"),
        "mathfrak" => Font("fraktur"),
        "mathsf" => Font("sans-serif"),
        "mathtt" => Font("monospace"),

        "hat" | "widehat" => Accent("^"),
        "bar" | "overline" => Accent("¯"),
        "vec" | "overrightarrow" => Accent("→"),
        "overleftarrow" => Accent("←"),
        "dot" => Accent("˙"),
        "ddot" => Accent("¨"),
        "tilde" | "widetilde" => Accent("~"),
        "check" => Accent("ˇ"),
        "breve" => Accent("˘"),
        "acute" => Accent("´"),
        "grave" => Accent("`"),
        "overbrace" => Accent("⏞"),
        "underline" => UnderMark("_"),
        "underbrace" => UnderMark("⏟"),

        "sum" => LargeOperator { glyph: "∑", limits: true },
        "prod" => LargeOperator { glyph: "∏", limits: true },
        "coprod" => LargeOperator { glyph: "∐", limits: true },
        "bigcup" => LargeOperator { glyph: "⋃", limits: true },
        "bigcap" => LargeOperator { glyph: "⋂", limits: true },
        "bigoplus" => LargeOperator { glyph: "⨁", limits: true },
        "bigotimes" => LargeOperator { glyph: "⨂", limits: true },
        "bigvee" => LargeOperator { glyph: "⋁", limits: true },
        "bigwedge" => LargeOperator { glyph: "⋀", limits: true },
        "int" => LargeOperator { glyph: "∫", limits: false },
        "iint" => LargeOperator { glyph: "∬", limits: false },
        "iiint" => LargeOperator { glyph: "∭", limits: false },
        "oint" => LargeOperator { glyph: "∮", limits: false },

        "lim" | "liminf" | "limsup" | "max" | "min" | "sup" | "inf" | "det" | "gcd" | "Pr" => {
            Function { limits: true }
        }
        "sin" | "cos" | "tan" | "cot" | "sec" | "csc" | "arcsin" | "arccos" | "arctan"
        | "sinh" | "cosh" | "tanh" | "coth" | "log" | "ln" | "lg" | "exp" | "dim" | "ker"
        | "deg" | "arg" | "hom" | "mod" | "bmod" => Function { limits: false },

        "quad" => Space("1em"),
        "qquad" => Space("2em"),
        "enspace" => Space("0.5em"),
        "thinspace" => Space("0.167em"),

        "displaystyle" | "textstyle" | "scriptstyle" | "limits" | "nolimits" | "big"
        | "Big" | "bigg" | "Bigg" | "bigl" | "bigr" | "Bigl" | "Bigr" | "hline" | "nonumber"
        | "notag" => Ignored,

        "infty" => Identifier("∞"),
        "partial" => Identifier("∂"),
        "nabla" => Identifier("∇"),
        "emptyset" | "varnothing" => Identifier("∅"),
        "hbar" => Identifier("ℏ"),
        "ell" => Identifier("ℓ"),
        "Re" => Identifier("ℜ"),
        "Im" => Identifier("ℑ"),
        "aleph" => Identifier("ℵ"),
        "imath" => Identifier("ı"),
        "jmath" => Identifier("ȷ"),

        _ => return operator(name).map(Operator),
    };
    Some(kind)
}

/// Glyph for a control symbol such as `\{` (given without the backslash).
pub fn control_symbol(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "{" => "{",
        "}" => "}",
        "|" => "‖",
        "%" => "%",
        "$" => "$",
        "#" => "#",
        "&" => "&",
        "_" => "_",
        _ => return None,
    })
}

/// Width of a spacing control symbol such as `\,`.
pub fn control_space(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "," => "0.167em",
        ":" | ">" => "0.222em",
        ";" => "0.278em",
        "!" => "-0.167em",
        " " => "0.333em",
        _ => return None,
    })
}

fn greek(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ϵ",
        "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "vartheta" => "ϑ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "varpi" => "ϖ",
        "rho" => "ρ",
        "varrho" => "ϱ",
        "sigma" => "σ",
        "varsigma" => "ς",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" => "ϕ",
        "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Upsilon" => "Υ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        _ => return None,
    })
}

fn operator(name: &str) -> Option<&'static str> {
    Some(match name {
        "times" => "×",
        "cdot" | "cdotp" => "⋅",
        "div" => "÷",
        "pm" => "±",
        "mp" => "∓",
        "ast" => "∗",
        "star" => "⋆",
        "circ" => "∘",
        "bullet" => "∙",
        "oplus" => "⊕",
        "otimes" => "⊗",
        "setminus" => "∖",
        "cup" => "∪",
        "cap" => "∩",
        "wedge" | "land" => "∧",
        "vee" | "lor" => "∨",
        "neg" | "lnot" => "¬",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "ll" => "≪",
        "gg" => "≫",
        "approx" => "≈",
        "equiv" => "≡",
        "sim" => "∼",
        "simeq" => "≃",
        "cong" => "≅",
        "propto" => "∝",
        "in" => "∈",
        "notin" => "∉",
        "ni" => "∋",
        "subset" => "⊂",
        "subseteq" => "⊆",
        "supset" => "⊃",
        "supseteq" => "⊇",
        "perp" => "⊥",
        "parallel" => "∥",
        "mid" => "∣",
        "forall" => "∀",
        "exists" => "∃",
        "to" | "rightarrow" => "→",
        "leftarrow" | "gets" => "←",
        "leftrightarrow" => "↔",
        "Rightarrow" | "implies" => "⇒",
        "Leftarrow" => "⇐",
        "Leftrightarrow" | "iff" => "⇔",
        "mapsto" => "↦",
        "uparrow" => "↑",
        "downarrow" => "↓",
        "longrightarrow" => "⟶",
        "longleftarrow" => "⟵",
        "ldots" | "dots" => "…",
        "cdots" => "⋯",
        "vdots" => "⋮",
        "ddots" => "⋱",
        "angle" => "∠",
        "triangle" => "△",
        "degree" => "°",
        "prime" => "′",
        "langle" => "⟨",
        "rangle" => "⟩",
        "lfloor" => "⌊",
        "rfloor" => "⌋",
        "lceil" => "⌈",
        "rceil" => "⌉",
        "vert" | "lvert" | "rvert" => "|",
        "Vert" | "lVert" | "rVert" => "‖",
        "lbrace" => "{",
        "rbrace" => "}",
        "colon" => ":",
        "therefore" => "∴",
        "because" => "∵",
        _ => return None,
    })
}
