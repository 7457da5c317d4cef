/// The three HTML leaf tags recognized inline.
pub struct HtmlTag;

impl HtmlTag {
    pub const BR: &'static str = "<br";
    pub const SUP: (&'static str, &'static str) = ("<sup>", "</sup>");
    pub const SUB: (&'static str, &'static str) = ("<sub>", "</sub>");

    /// `<br>`, `<br/>`, `<br />`: returns the tag length.
    pub fn line_break(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::BR)?;
        let after_ws = rest.trim_start();
        let after_slash = after_ws.strip_prefix('/').unwrap_or(after_ws);
        let after = after_slash.strip_prefix('>')?;
        Some(s.len() - after.len())
    }

    /// `open text close` with non-empty text free of `<`: returns the inner
    /// text and the total length.
    pub fn wrapped<'a>(s: &'a str, (open, close): (&str, &str)) -> Option<(&'a str, usize)> {
        let rest = s.strip_prefix(open)?;
        let end = rest.find('<')?;
        if end == 0 || !rest[end..].starts_with(close) {
            return None;
        }
        Some((&rest[..end], open.len() + end + close.len()))
    }
}
