//! # Grammar Rules
//!
//! Each rule takes a `&mut Parser` and builds one construct:
//!
//! | Input | Node |
//! |-------|------|
//! | `{ ... }` | `GROUP` |
//! | `\cmd[opt]{arg}` | `COMMAND_CALL` (with `OPTION`/`GROUP` children) |
//! | `base^sup_sub` | `SCRIPT` |
//! | `\begin{env} ... \end{env}` | `ENVIRONMENT` |
//! | `\left( ... \right)` | `LEFT_RIGHT` |
//!
//! Everything else (letters, digits, operators, control symbols) stays a
//! plain token in its parent. Rules are lenient: they record a
//! [`ParseError`](super::ParseError) and carry on, so the tree always holds
//! every byte of the input.

mod structure;

use crate::commands;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse a whole formula into a ROOT node.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    while !p.at_end() {
        item(p);
    }

    m.complete(p, SyntaxKind::ROOT);
}

/// Parse one item of a sequence: trivia, or an atom with its scripts.
pub(crate) fn item(p: &mut Parser<'_, '_>) {
    match p.current() {
        k if k.is_trivia() => p.bump(),
        SyntaxKind::RBRACE => p.err_and_bump("unmatched `}`"),
        SyntaxKind::COMMAND if p.at_command("right") => {
            p.err_and_bump("`\\right` without matching `\\left`")
        }
        SyntaxKind::COMMAND if p.at_command("end") => {
            p.err_and_bump("`\\end` without matching `\\begin`")
        }
        _ => scripted_atom(p),
    }
}

/// An atom followed by any number of `^`/`_` attachments.
///
/// The SCRIPT node is only kept when an attachment follows; otherwise the
/// marker is abandoned and the atom stays in the enclosing sequence.
fn scripted_atom(p: &mut Parser<'_, '_>) {
    let m = p.start();

    let has_base = !matches!(p.current(), SyntaxKind::CARET | SyntaxKind::UNDERSCORE);
    if has_base {
        atom(p);
    }

    if !at_script(p) {
        m.abandon(p);
        return;
    }

    let (mut seen_sup, mut seen_sub) = (false, false);
    while at_script(p) {
        p.skip_trivia();
        let is_sup = p.at(SyntaxKind::CARET);
        if (is_sup && seen_sup) || (!is_sup && seen_sub) {
            p.error(if is_sup {
                "double superscript"
            } else {
                "double subscript"
            });
        }
        seen_sup |= is_sup;
        seen_sub |= !is_sup;
        p.bump();
        if !argument(p) {
            p.error(if is_sup {
                "missing superscript"
            } else {
                "missing subscript"
            });
        }
    }

    m.complete(p, SyntaxKind::SCRIPT);
}

fn at_script(p: &Parser<'_, '_>) -> bool {
    matches!(
        p.peek_significant(),
        SyntaxKind::CARET | SyntaxKind::UNDERSCORE
    )
}

/// A single atom: a group, a command with its arguments, or one token.
fn atom(p: &mut Parser<'_, '_>) {
    match p.current() {
        SyntaxKind::LBRACE => structure::group(p),
        SyntaxKind::COMMAND if p.at_command("begin") => structure::environment(p),
        SyntaxKind::COMMAND if p.at_command("left") => structure::left_right(p),
        SyntaxKind::COMMAND => command(p),
        _ => p.bump(),
    }
}

/// Parse one argument for a command or script. Returns false if none is
/// available (end of input, a closing brace, `&`, `\\`, ...).
pub(crate) fn argument(p: &mut Parser<'_, '_>) -> bool {
    p.skip_trivia();
    match p.current() {
        SyntaxKind::LBRACE => {
            structure::group(p);
            true
        }
        SyntaxKind::COMMAND
            if ["begin", "end", "left", "right"].contains(&p.command_name()) =>
        {
            false
        }
        SyntaxKind::COMMAND => {
            command(p);
            true
        }
        SyntaxKind::LETTER
        | SyntaxKind::DIGIT
        | SyntaxKind::OPERATOR
        | SyntaxKind::PRIME
        | SyntaxKind::TEXT
        | SyntaxKind::LBRACKET
        | SyntaxKind::RBRACKET => {
            p.bump();
            true
        }
        SyntaxKind::CONTROL_SYMBOL if p.current_text() != "\\\\" => {
            p.bump();
            true
        }
        _ => false,
    }
}

/// A control word and the arguments its arity demands.
fn command(p: &mut Parser<'_, '_>) {
    let m = p.start();
    let name = p.command_name();
    let arity = commands::arity(name);
    p.bump();

    if !p.enter() {
        p.error("formula nested too deeply");
        m.complete(p, SyntaxKind::COMMAND_CALL);
        return;
    }

    if arity.optional && p.peek_significant() == SyntaxKind::LBRACKET {
        p.skip_trivia();
        structure::option(p);
    }
    for _ in 0..arity.required {
        if !argument(p) {
            p.error(format!("missing argument for `\\{name}`"));
            break;
        }
    }

    p.leave();
    m.complete(p, SyntaxKind::COMMAND_CALL);
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::syntax_kind::SyntaxKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn node_kinds(input: &str) -> Vec<SyntaxKind> {
        parse(input)
            .syntax()
            .descendants()
            .map(|n| n.kind())
            .collect()
    }

    #[test]
    fn tokens_stay_in_root() {
        assert_eq!(node_kinds("a+b"), vec![SyntaxKind::ROOT]);
    }

    #[test]
    fn command_collects_arguments() {
        assert_eq!(
            node_kinds(r"\frac{a}{b}"),
            vec![
                SyntaxKind::ROOT,
                SyntaxKind::COMMAND_CALL,
                SyntaxKind::GROUP,
                SyntaxKind::GROUP,
            ]
        );
    }

    #[test]
    fn bare_token_arguments() {
        let parse = parse(r"\frac12");
        assert!(parse.is_ok());
        let call = parse.syntax().first_child().unwrap();
        assert_eq!(call.kind(), SyntaxKind::COMMAND_CALL);
        assert_eq!(call.text().to_string(), r"\frac12");
    }

    #[test]
    fn script_wraps_base_and_attachments() {
        assert_eq!(
            node_kinds("x_i^{2}"),
            vec![SyntaxKind::ROOT, SyntaxKind::SCRIPT, SyntaxKind::GROUP]
        );
    }

    #[test]
    fn script_takes_single_digit() {
        let parse = parse("x^23");
        let script = parse.syntax().first_child().unwrap();
        assert_eq!(script.text().to_string(), "x^2");
    }

    #[test]
    fn sqrt_with_index() {
        assert_eq!(
            node_kinds(r"\sqrt[3]{x}"),
            vec![
                SyntaxKind::ROOT,
                SyntaxKind::COMMAND_CALL,
                SyntaxKind::OPTION,
                SyntaxKind::GROUP,
            ]
        );
    }

    #[rstest]
    #[case("{a", "unclosed `{`")]
    #[case("a}", "unmatched `}`")]
    #[case(r"\frac{a}", "missing argument for `\\frac`")]
    #[case("x^", "missing superscript")]
    #[case("x^a^b", "double superscript")]
    #[case(r"\right)", "`\\right` without matching `\\left`")]
    #[case(r"\left( x", "missing `\\right`")]
    #[case(r"\begin{matrix} a", "unterminated environment `matrix`")]
    #[case(r"\begin{matrix} a \end{pmatrix}", "`\\end{pmatrix}` does not match `\\begin{matrix}`")]
    fn malformed_input_reports_error(#[case] input: &str, #[case] message: &str) {
        let parse = parse(input);
        let messages: Vec<_> = parse.errors().iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&message), "{input:?} gave {messages:?}");
        assert_eq!(parse.syntax().text().to_string(), input);
    }

    #[test]
    fn deep_nesting_is_reported_not_overflowed() {
        let input = format!("{}x{}", "{".repeat(400), "}".repeat(400));
        let parse = parse(&input);
        assert!(!parse.is_ok());
        assert_eq!(parse.syntax().text().to_string(), input);
    }
}
