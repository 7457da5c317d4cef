//! MathML emission from the LaTeX CST.
//!
//! The walk is purely structural: each node kind maps to one MathML element
//! and sequences with more than one element are wrapped in `<mrow>`. Output
//! uses only presentation elements the downstream converter understands
//! (`mi`, `mn`, `mo`, `mtext`, `mspace`, `mfrac`, `msup`, `msub`,
//! `msubsup`, `msqrt`, `mroot`, `mover`, `munder`, `munderover`, `mtable`,
//! `mfenced`, `mstyle`, `merror`).

use html_escape::{encode_double_quoted_attribute, encode_text};
use rowan::NodeOrToken;

use crate::commands::{self, CommandKind};
use crate::error::TexError;
use crate::parser::{MAX_NESTING, parse};
use crate::syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

/// Layout of the formula in its surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Inline,
    Block,
}

impl Display {
    fn as_str(self) -> &'static str {
        match self {
            Display::Inline => "inline",
            Display::Block => "block",
        }
    }
}

/// Converts a LaTeX formula (without `$` delimiters) into a MathML document.
///
/// Any syntax error fails the whole formula.
pub fn latex_to_mathml(latex: &str, display: Display) -> Result<String, TexError> {
    let parse = parse(latex);
    if parse.nesting_exceeded() {
        return Err(TexError::TooDeep { limit: MAX_NESTING });
    }
    if let Some(err) = parse.errors().first() {
        return Err(TexError::Syntax(err.clone()));
    }

    let root = parse.syntax();
    let body = wrap(sequence(&significant(&root)));
    Ok(format!(
        r#"<math xmlns="{MATHML_NS}" display="{}">{body}</math>"#,
        display.as_str()
    ))
}

/// Direct children minus trivia and group braces.
fn significant(node: &SyntaxNode) -> Vec<SyntaxElement> {
    node.children_with_tokens()
        .filter(|e| {
            !e.kind().is_trivia() && !matches!(e.kind(), SyntaxKind::LBRACE | SyntaxKind::RBRACE)
        })
        .collect()
}

/// One MathML element per item, merging digit runs into a single `<mn>`.
fn sequence(elems: &[SyntaxElement]) -> Vec<String> {
    let mut out = vec![];
    let mut i = 0;

    while i < elems.len() {
        if elems[i].kind() == SyntaxKind::DIGIT {
            let mut number = String::new();
            while let Some(NodeOrToken::Token(t)) = elems.get(i) {
                let decimal_point = t.text() == "."
                    && !number.contains('.')
                    && elems.get(i + 1).map(|e| e.kind()) == Some(SyntaxKind::DIGIT);
                if t.kind() != SyntaxKind::DIGIT && !decimal_point {
                    break;
                }
                number.push_str(t.text());
                i += 1;
            }
            out.push(format!("<mn>{number}</mn>"));
            continue;
        }

        out.extend(element(&elems[i]));
        i += 1;
    }

    out
}

/// Wraps a sequence so it counts as a single element.
fn wrap(items: Vec<String>) -> String {
    match items.len() {
        0 => "<mrow/>".to_string(),
        1 => items.into_iter().collect(),
        _ => format!("<mrow>{}</mrow>", items.concat()),
    }
}

fn element(e: &SyntaxElement) -> Option<String> {
    match e {
        NodeOrToken::Token(t) => token(t),
        NodeOrToken::Node(n) => match n.kind() {
            SyntaxKind::GROUP => Some(wrap(sequence(&significant(n)))),
            SyntaxKind::COMMAND_CALL => command(n),
            SyntaxKind::SCRIPT => Some(script(n)),
            SyntaxKind::ENVIRONMENT => Some(environment(n)),
            SyntaxKind::LEFT_RIGHT => Some(left_right(n)),
            _ => None,
        },
    }
}

fn token(t: &SyntaxToken) -> Option<String> {
    let text = t.text();
    match t.kind() {
        SyntaxKind::LETTER => Some(mi(text)),
        SyntaxKind::DIGIT => Some(format!("<mn>{text}</mn>")),
        SyntaxKind::OPERATOR | SyntaxKind::LBRACKET | SyntaxKind::RBRACKET => Some(mo(text)),
        SyntaxKind::PRIME => Some(mo("′")),
        SyntaxKind::TEXT if text == "~" => Some(mspace("0.333em")),
        SyntaxKind::TEXT if text.chars().all(char::is_alphabetic) => Some(mi(text)),
        SyntaxKind::TEXT => Some(mo(text)),
        SyntaxKind::CONTROL_SYMBOL => {
            let symbol = &text[1..];
            if symbol == "\\" {
                Some(r#"<mspace linebreak="newline"/>"#.to_string())
            } else if let Some(width) = commands::control_space(symbol) {
                Some(mspace(width))
            } else {
                Some(mo(commands::control_symbol(symbol).unwrap_or(symbol)))
            }
        }
        _ => None,
    }
}

fn mi(text: &str) -> String {
    format!("<mi>{}</mi>", encode_text(text))
}

fn mo(text: &str) -> String {
    format!("<mo>{}</mo>", encode_text(text))
}

fn mspace(width: &str) -> String {
    format!(r#"<mspace width="{width}"/>"#)
}

fn fenced(open: &str, close: &str, body: &str) -> String {
    format!(
        r#"<mfenced open="{}" close="{}">{body}</mfenced>"#,
        encode_double_quoted_attribute(open),
        encode_double_quoted_attribute(close)
    )
}

/// Arguments of a COMMAND_CALL: the optional `[...]` and the required ones.
fn arguments(call: &SyntaxNode) -> (Option<SyntaxNode>, Vec<SyntaxElement>) {
    let mut option = None;
    let mut args = vec![];
    for e in call.children_with_tokens().skip(1) {
        match e {
            _ if e.kind().is_trivia() => {}
            NodeOrToken::Node(n) if n.kind() == SyntaxKind::OPTION => option = Some(n),
            e => args.push(e),
        }
    }
    (option, args)
}

fn arg_mathml(arg: Option<&SyntaxElement>) -> String {
    arg.and_then(element).unwrap_or_else(|| "<mrow/>".to_string())
}

/// Raw source text of an argument with its braces removed.
fn arg_text(arg: Option<&SyntaxElement>) -> String {
    let text = match arg {
        Some(NodeOrToken::Node(n)) => n.text().to_string(),
        Some(NodeOrToken::Token(t)) => t.text().to_string(),
        None => String::new(),
    };
    let inner = text.strip_prefix('{').unwrap_or(&text);
    inner.strip_suffix('}').unwrap_or(inner).to_string()
}

fn command(call: &SyntaxNode) -> Option<String> {
    let head = call.first_token()?;
    let name = head.text().get(1..).unwrap_or("");
    let (option, args) = arguments(call);
    let arg = |i: usize| arg_mathml(args.get(i));

    let out = match commands::lookup(name) {
        Some(CommandKind::Identifier(glyph)) => mi(glyph),
        Some(CommandKind::Operator(glyph)) => mo(glyph),
        Some(CommandKind::LargeOperator { glyph, .. }) => mo(glyph),
        Some(CommandKind::Function { .. }) => mi(name),
        Some(CommandKind::Fraction) => format!("<mfrac>{}{}</mfrac>", arg(0), arg(1)),
        Some(CommandKind::Binomial) => fenced(
            "(",
            ")",
            &format!(r#"<mfrac linethickness="0">{}{}</mfrac>"#, arg(0), arg(1)),
        ),
        Some(CommandKind::Root) => match option {
            Some(index) => {
                let mut inner = significant(&index);
                if inner.first().map(|e| e.kind()) == Some(SyntaxKind::LBRACKET) {
                    inner.remove(0);
                }
                if inner.last().map(|e| e.kind()) == Some(SyntaxKind::RBRACKET) {
                    inner.pop();
                }
                format!("<mroot>{}{}</mroot>", arg(0), wrap(sequence(&inner)))
            }
            None => format!("<msqrt>{}</msqrt>", arg(0)),
        },
        Some(CommandKind::Accent(mark)) => {
            format!(r#"<mover accent="true">{}{}</mover>"#, arg(0), mo(mark))
        }
        Some(CommandKind::UnderMark(mark)) => format!("<munder>{}{}</munder>", arg(0), mo(mark)),
        Some(CommandKind::OverSet) => format!("<mover>{}{}</mover>", arg(1), arg(0)),
        Some(CommandKind::UnderSet) => format!("<munder>{}{}</munder>", arg(1), arg(0)),
        Some(CommandKind::Text) => format!("<mtext>{}</mtext>", encode_text(&arg_text(args.first()))),
        Some(CommandKind::OperatorName) => mi(arg_text(args.first()).trim()),
        Some(CommandKind::Font(variant)) => font(variant, args.first()),
        Some(CommandKind::Space(width)) => mspace(width),
        Some(CommandKind::Ignored) => return None,
        None => format!("<merror><mtext>\\{}</mtext></merror>", encode_text(name)),
    };
    Some(out)
}

fn font(variant: &str, arg: Option<&SyntaxElement>) -> String {
    let text = arg_text(arg);
    let letters = !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric());

    match variant {
        "double-struck" if letters => mi(&text.chars().map(double_struck).collect::<String>()),
        "normal" if letters => format!(
            r#"<mi mathvariant="normal">{}</mi>"#,
            encode_text(&text)
        ),
        _ => format!(
            r#"<mstyle mathvariant="{variant}">{}</mstyle>"#,
            arg_mathml(arg)
        ),
    }
}

fn double_struck(c: char) -> char {
    let mapped = match c {
        'C' => return 'ℂ',
        'H' => return 'ℍ',
        'N' => return 'ℕ',
        'P' => return 'ℙ',
        'Q' => return 'ℚ',
        'R' => return 'ℝ',
        'Z' => return 'ℤ',
        'A'..='Z' => 0x1D538 + (c as u32 - 'A' as u32),
        'a'..='z' => 0x1D552 + (c as u32 - 'a' as u32),
        '0'..='9' => 0x1D7D8 + (c as u32 - '0' as u32),
        _ => return c,
    };
    char::from_u32(mapped).unwrap_or(c)
}

fn script(node: &SyntaxNode) -> String {
    let elems = significant(node);
    let mut iter = elems.iter().peekable();

    let base = match iter.peek() {
        Some(e) if !matches!(e.kind(), SyntaxKind::CARET | SyntaxKind::UNDERSCORE) => iter.next(),
        _ => None,
    };

    let (mut sub, mut sup) = (None, None);
    while let Some(e) = iter.next() {
        match e.kind() {
            SyntaxKind::CARET => sup = Some(arg_mathml(iter.next())),
            SyntaxKind::UNDERSCORE => sub = Some(arg_mathml(iter.next())),
            _ => {}
        }
    }

    let limits = base.is_some_and(takes_limits);
    let base = arg_mathml(base);
    let (under_over, sub_sup, over, under) = if limits {
        ("munderover", "", "mover", "munder")
    } else {
        ("", "msubsup", "msup", "msub")
    };

    match (sub, sup) {
        (Some(sub), Some(sup)) => {
            let tag = if limits { under_over } else { sub_sup };
            format!("<{tag}>{base}{sub}{sup}</{tag}>")
        }
        (None, Some(sup)) => format!("<{over}>{base}{sup}</{over}>"),
        (Some(sub), None) => format!("<{under}>{base}{sub}</{under}>"),
        (None, None) => base,
    }
}

/// Sums, products and `\lim`-like functions put their scripts above/below.
fn takes_limits(base: &SyntaxElement) -> bool {
    let NodeOrToken::Node(n) = base else {
        return false;
    };
    if n.kind() != SyntaxKind::COMMAND_CALL {
        return false;
    }
    let Some(head) = n.first_token() else {
        return false;
    };
    matches!(
        commands::lookup(head.text().get(1..).unwrap_or("")),
        Some(CommandKind::LargeOperator { limits: true, .. })
            | Some(CommandKind::Function { limits: true })
    )
}

fn environment(node: &SyntaxNode) -> String {
    let name = node
        .children()
        .find(|n| n.kind() == SyntaxKind::ENV_NAME)
        .map(|n| arg_text(Some(&NodeOrToken::Node(n))).trim().to_string())
        .unwrap_or_default();
    let body = node
        .children()
        .find(|n| n.kind() == SyntaxKind::ENV_BODY)
        .map(|n| significant(&n))
        .unwrap_or_default();

    if matches!(
        name.as_str(),
        "equation" | "equation*" | "displaymath" | "math"
    ) {
        return wrap(sequence(&body));
    }

    let table = table(&body);
    match name.as_str() {
        "pmatrix" => fenced("(", ")", &table),
        "bmatrix" => fenced("[", "]", &table),
        "Bmatrix" => fenced("{", "}", &table),
        "vmatrix" => fenced("|", "|", &table),
        "Vmatrix" => fenced("‖", "‖", &table),
        "cases" => fenced("{", "", &table),
        _ => table,
    }
}

/// Splits an environment body on `\\` (rows) and `&` (cells).
fn table(body: &[SyntaxElement]) -> String {
    let mut rows: Vec<Vec<Vec<SyntaxElement>>> = vec![vec![vec![]]];

    for e in body {
        match e {
            NodeOrToken::Token(t)
                if t.kind() == SyntaxKind::CONTROL_SYMBOL && t.text() == "\\\\" =>
            {
                rows.push(vec![vec![]]);
            }
            NodeOrToken::Token(t) if t.kind() == SyntaxKind::AMPERSAND => {
                if let Some(row) = rows.last_mut() {
                    row.push(vec![]);
                }
            }
            e => {
                if let Some(cell) = rows.last_mut().and_then(|row| row.last_mut()) {
                    cell.push(e.clone());
                }
            }
        }
    }

    // A trailing `\\` leaves one empty row behind
    if rows.len() > 1 && rows.last().is_some_and(|r| r.iter().all(Vec::is_empty)) {
        rows.pop();
    }

    let rows: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<mtd>{}</mtd>", sequence(cell).concat()))
                .collect();
            format!("<mtr>{cells}</mtr>")
        })
        .collect();
    format!("<mtable>{rows}</mtable>")
}

fn left_right(node: &SyntaxNode) -> String {
    let delimiters: Vec<SyntaxToken> = node
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .collect();
    let open = delimiters.get(1).map(delimiter_glyph).unwrap_or_default();
    let close = delimiters.get(3).map(delimiter_glyph).unwrap_or_default();

    let body = node
        .children()
        .find(|n| n.kind() == SyntaxKind::FENCE_BODY)
        .map(|n| wrap(sequence(&significant(&n))))
        .unwrap_or_else(|| "<mrow/>".to_string());

    fenced(&open, &close, &body)
}

fn delimiter_glyph(t: &SyntaxToken) -> String {
    let text = t.text();
    match t.kind() {
        SyntaxKind::OPERATOR if text == "." => String::new(),
        SyntaxKind::CONTROL_SYMBOL => commands::control_symbol(&text[1..])
            .unwrap_or(&text[1..])
            .to_string(),
        SyntaxKind::COMMAND => match commands::lookup(&text[1..]) {
            Some(CommandKind::Operator(glyph)) | Some(CommandKind::Identifier(glyph)) => {
                glyph.to_string()
            }
            _ => text[1..].to_string(),
        },
        _ => text.to_string(),
    }
}
