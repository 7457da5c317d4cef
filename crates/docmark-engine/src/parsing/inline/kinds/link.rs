/// `[text](url)` links and `![alt](url)` images.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: char = '!';
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: char = ']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: char = ')';

    /// An image at the start of `s`: `(alt, url, byte length)`. The alt text
    /// may be empty, the url may not.
    pub fn image_at(s: &str) -> Option<(&str, &str, usize)> {
        let rest = s.strip_prefix(Self::IMAGE_BANG)?;
        let (alt, url, len) = Self::parts(rest, true)?;
        Some((alt, url, len + 1))
    }

    /// A link at the start of `s`: `(text, url, byte length)`. Neither part
    /// may be empty.
    pub fn link_at(s: &str) -> Option<(&str, &str, usize)> {
        Self::parts(s, false)
    }

    fn parts(s: &str, allow_empty_label: bool) -> Option<(&str, &str, usize)> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::LABEL_OPEN) {
            return None;
        }
        let label_end = 1 + s[1..].find(Self::LABEL_CLOSE)?;
        let label = &s[1..label_end];
        if label.is_empty() && !allow_empty_label {
            return None;
        }
        if b.get(label_end + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let url_start = label_end + 2;
        let url_end = url_start + s[url_start..].find(Self::URL_CLOSE)?;
        if url_end == url_start {
            return None;
        }
        Some((label, &s[url_start..url_end], url_end + 1))
    }
}
