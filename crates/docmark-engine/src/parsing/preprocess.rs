//! Text cleanup applied before line classification.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::options::ConvertOptions;

/// Zero-width characters that chat tools like to sprinkle into copied text.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Runs every enabled cleanup step. Line count is preserved.
pub fn preprocess<'a>(text: &'a str, options: &ConvertOptions) -> Cow<'a, str> {
    let mut out = unify_newlines(text);
    if options.strip_zero_width && out.contains(ZERO_WIDTH) {
        out = Cow::Owned(clean_text(&out).into_owned());
    }
    if options.convert_latex_delimiters && has_latex_delimiters(&out) {
        out = Cow::Owned(convert_latex_delimiters(&out).into_owned());
    }
    out
}

/// CRLF and lone CR become LF.
pub fn unify_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Removes zero-width spaces, joiners and byte-order marks.
pub fn clean_text(text: &str) -> Cow<'_, str> {
    if text.contains(ZERO_WIDTH) {
        Cow::Owned(text.replace(ZERO_WIDTH, ""))
    } else {
        Cow::Borrowed(text)
    }
}

fn has_latex_delimiters(text: &str) -> bool {
    text.contains("\\[") || text.contains("\\(")
}

/// Rewrites `\[...\]` to `$$...$$` and `\(...\)` to `$...$`.
pub fn convert_latex_delimiters(text: &str) -> Cow<'_, str> {
    static DISPLAY: OnceLock<Regex> = OnceLock::new();
    static INLINE: OnceLock<Regex> = OnceLock::new();

    if !has_latex_delimiters(text) {
        return Cow::Borrowed(text);
    }

    let display = DISPLAY.get_or_init(|| {
        Regex::new(r"(?s)\\\[(.+?)\\\]").expect("display math delimiter regex")
    });
    let inline = INLINE.get_or_init(|| {
        Regex::new(r"(?s)\\\((.+?)\\\)").expect("inline math delimiter regex")
    });

    let text = display.replace_all(text, |caps: &Captures<'_>| format!("$${}$$", &caps[1]));
    let text = inline.replace_all(&text, |caps: &Captures<'_>| format!("${}$", &caps[1]));
    Cow::Owned(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_zero_width_characters() {
        assert_eq!(clean_text("a\u{200B}b\u{FEFF}c\u{200D}"), "abc");
        assert!(matches!(clean_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn converts_display_delimiters() {
        assert_eq!(convert_latex_delimiters(r"\[x^2\]"), "$$x^2$$");
    }

    #[test]
    fn converts_inline_delimiters() {
        assert_eq!(
            convert_latex_delimiters(r"where \(a\) and \(b\) hold"),
            "where $a$ and $b$ hold"
        );
    }

    #[test]
    fn display_delimiters_may_span_lines() {
        let input = "\\[\na + b\n\\]";
        let out = convert_latex_delimiters(input);
        assert_eq!(out, "$$\na + b\n$$");
        assert_eq!(out.lines().count(), input.lines().count());
    }

    #[test]
    fn unifies_line_endings() {
        assert_eq!(unify_newlines("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn disabled_steps_are_skipped() {
        let options = ConvertOptions {
            strip_zero_width: false,
            convert_latex_delimiters: false,
            ..ConvertOptions::default()
        };
        assert_eq!(preprocess("a\u{200B}\\(x\\)", &options), "a\u{200B}\\(x\\)");
    }
}
