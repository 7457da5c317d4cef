/// Emphasis and strikethrough delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const STRONG_EMPHASIS: [&'static str; 2] = ["***", "___"];
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    pub const STRIKE: &'static str = "~~";

    /// For `s` starting with `delim`: the offset of the nearest closing
    /// `delim` that leaves at least one character inside, on the same line.
    pub fn lazy_close(s: &str, delim: &str) -> Option<usize> {
        let inner = s.strip_prefix(delim)?;
        let first = inner.chars().next()?;
        if first == '\n' {
            return None;
        }
        let line_end = inner.find('\n').unwrap_or(inner.len());
        let from = first.len_utf8();
        let found = inner.get(from..line_end)?.find(delim)?;
        Some(delim.len() + from + found)
    }

    /// Single-marker italic `*x*` / `_x_` for `s` starting with `marker`.
    ///
    /// Neither delimiter may touch another copy of the marker (`prev` is the
    /// byte before `s`), and the content may not start or end with
    /// whitespace. Returns the offset of the closing marker.
    pub fn italic_close(s: &str, marker: u8, prev: Option<u8>) -> Option<usize> {
        let b = s.as_bytes();
        if b.first() != Some(&marker) || prev == Some(marker) || b.get(1) == Some(&marker) {
            return None;
        }
        let end = 1 + b[1..].iter().position(|&c| c == marker)?;
        let inner = &s[1..end];
        let edges_ok = inner
            .chars()
            .next()
            .zip(inner.chars().next_back())
            .is_some_and(|(first, last)| !first.is_whitespace() && !last.is_whitespace());
        if !edges_ok || b.get(end + 1) == Some(&marker) {
            return None;
        }
        Some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("**bold** x", "**", Some(6))]
    #[case("***a***", "***", Some(4))]
    #[case("****", "**", None)]
    #[case("**a\nb**", "**", None)]
    #[case("~~gone~~", "~~", Some(6))]
    #[case("**é**", "**", Some(4))]
    fn lazy_close(#[case] s: &str, #[case] delim: &str, #[case] expected: Option<usize>) {
        assert_eq!(Emphasis::lazy_close(s, delim), expected);
    }

    #[rstest]
    #[case("*x*", None, Some(2))]
    #[case("*two words*", None, Some(10))]
    #[case("* x*", None, None)]
    #[case("*x *", None, None)]
    #[case("*x**", None, None)]
    #[case("*x*", Some(b'*'), None)]
    #[case("**x*", None, None)]
    #[case("*unclosed", None, None)]
    fn italic_close(#[case] s: &str, #[case] prev: Option<u8>, #[case] expected: Option<usize>) {
        assert_eq!(Emphasis::italic_close(s, Emphasis::STAR, prev), expected);
    }
}
