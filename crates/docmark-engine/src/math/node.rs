/// One element of the intermediate (MathML) tree.
///
/// Positional children are optional: a malformed `<mfrac>` with a single
/// child keeps its numerator and simply has no denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathNode {
    Row(Vec<MathNode>),
    Identifier(String),
    Number(String),
    Operator(String),
    Text(String),
    Space,
    Fraction {
        num: Option<Box<MathNode>>,
        den: Option<Box<MathNode>>,
        /// `false` for `linethickness="0"` (binomials).
        bar: bool,
    },
    Superscript {
        base: Option<Box<MathNode>>,
        sup: Option<Box<MathNode>>,
    },
    Subscript {
        base: Option<Box<MathNode>>,
        sub: Option<Box<MathNode>>,
    },
    SubSup {
        base: Option<Box<MathNode>>,
        sub: Option<Box<MathNode>>,
        sup: Option<Box<MathNode>>,
    },
    Sqrt(Vec<MathNode>),
    Root {
        radicand: Option<Box<MathNode>>,
        index: Option<Box<MathNode>>,
    },
    /// Large operator with optional bounds. `body` is the element that
    /// followed the operator in its row.
    Nary {
        op: String,
        sub: Option<Box<MathNode>>,
        sup: Option<Box<MathNode>>,
        body: Option<Box<MathNode>>,
        /// Bounds set above and below rather than as scripts.
        limits: bool,
    },
    Over {
        base: Option<Box<MathNode>>,
        mark: Option<Box<MathNode>>,
        accent: bool,
    },
    Under {
        base: Option<Box<MathNode>>,
        mark: Option<Box<MathNode>>,
    },
    /// rows → cells → cell content
    Table(Vec<Vec<Vec<MathNode>>>),
    Fenced {
        open: String,
        close: String,
        body: Vec<MathNode>,
    },
    /// Anything without a dedicated variant. Rewritten by reattaching the
    /// children to the parent, followed by the element's own text.
    Other {
        tag: String,
        text: Option<String>,
        children: Vec<MathNode>,
    },
}

/// Glyphs that become n-ary structures when they carry bounds.
pub const NARY_OPERATORS: &[&str] = &[
    "∑", "∏", "∐", "⋃", "⋂", "⨁", "⨂", "⋁", "⋀", "∫", "∬", "∭", "∮",
];

impl MathNode {
    /// The operator glyph if this is a large operator.
    pub fn nary_glyph(&self) -> Option<&str> {
        match self {
            MathNode::Operator(op) if NARY_OPERATORS.contains(&op.as_str()) => Some(op),
            _ => None,
        }
    }
}
