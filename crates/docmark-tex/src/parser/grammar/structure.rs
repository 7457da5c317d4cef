//! Bracketing constructs: groups, optional arguments, environments and
//! `\left ... \right` fences.

use super::item;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// `{ item* }`
pub(super) fn group(p: &mut Parser<'_, '_>) {
    if !p.enter() {
        p.err_and_bump("formula nested too deeply");
        return;
    }

    let m = p.start();
    p.bump(); // {

    while !p.at_end() && !p.at(SyntaxKind::RBRACE) {
        item(p);
    }
    if !p.eat(SyntaxKind::RBRACE) {
        p.error("unclosed `{`");
    }

    m.complete(p, SyntaxKind::GROUP);
    p.leave();
}

/// `[ item* ]` after a command that takes an optional argument.
pub(super) fn option(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump(); // [

    while !p.at_end() && !p.at(SyntaxKind::RBRACKET) && !p.at(SyntaxKind::RBRACE) {
        item(p);
    }
    if !p.eat(SyntaxKind::RBRACKET) {
        p.error("unclosed `[`");
    }

    m.complete(p, SyntaxKind::OPTION);
}

/// `\begin{name} body \end{name}`
pub(super) fn environment(p: &mut Parser<'_, '_>) {
    if !p.enter() {
        p.err_and_bump("formula nested too deeply");
        return;
    }

    let m = p.start();
    p.bump(); // \begin
    let name = env_name(p);

    // Column specification, e.g. `\begin{array}{cc}`
    if matches!(name.as_deref(), Some("array" | "tabular"))
        && p.peek_significant() == SyntaxKind::LBRACE
    {
        p.skip_trivia();
        group(p);
    }

    let body = p.start();
    while !p.at_end() && !p.at_command("end") {
        item(p);
    }
    body.complete(p, SyntaxKind::ENV_BODY);

    let shown = name.as_deref().unwrap_or("");
    if p.at_command("end") {
        p.bump();
        let end = env_name(p);
        if end.is_some() && end != name {
            p.error(format!(
                "`\\end{{{}}}` does not match `\\begin{{{shown}}}`",
                end.as_deref().unwrap_or("")
            ));
        }
    } else {
        p.error(format!("unterminated environment `{shown}`"));
    }

    m.complete(p, SyntaxKind::ENVIRONMENT);
    p.leave();
}

/// `{name}` after `\begin` or `\end`. Returns the name when present.
fn env_name(p: &mut Parser<'_, '_>) -> Option<String> {
    if p.peek_significant() != SyntaxKind::LBRACE {
        p.error("missing environment name");
        return None;
    }
    p.skip_trivia();

    let m = p.start();
    p.bump(); // {
    let mut name = String::new();
    while !p.at_end() && !p.at(SyntaxKind::RBRACE) {
        name.push_str(p.current_text().trim());
        p.bump();
    }
    if !p.eat(SyntaxKind::RBRACE) {
        p.error("unclosed environment name");
    }
    m.complete(p, SyntaxKind::ENV_NAME);

    Some(name)
}

/// `\left<delim> body \right<delim>`
pub(super) fn left_right(p: &mut Parser<'_, '_>) {
    if !p.enter() {
        p.err_and_bump("formula nested too deeply");
        return;
    }

    let m = p.start();
    p.bump(); // \left
    if !delimiter(p) {
        p.error("missing delimiter after `\\left`");
    }

    let body = p.start();
    while !p.at_end() && !p.at_command("right") {
        item(p);
    }
    body.complete(p, SyntaxKind::FENCE_BODY);

    if p.at_command("right") {
        p.bump();
        if !delimiter(p) {
            p.error("missing delimiter after `\\right`");
        }
    } else {
        p.error("missing `\\right`");
    }

    m.complete(p, SyntaxKind::LEFT_RIGHT);
    p.leave();
}

/// The delimiter token after `\left`/`\right`: `(`, `[`, `.`, `\{`, `\langle`, ...
fn delimiter(p: &mut Parser<'_, '_>) -> bool {
    p.skip_trivia();
    match p.current() {
        SyntaxKind::OPERATOR
        | SyntaxKind::LBRACKET
        | SyntaxKind::RBRACKET
        | SyntaxKind::CONTROL_SYMBOL
        | SyntaxKind::TEXT => {
            p.bump();
            true
        }
        SyntaxKind::COMMAND if !matches!(p.command_name(), "right" | "left" | "end") => {
            p.bump();
            true
        }
        _ => false,
    }
}
