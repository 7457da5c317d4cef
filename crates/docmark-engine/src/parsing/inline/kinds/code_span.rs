/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Byte offset of the closing tick in `s`, which starts with a tick.
    /// The content must be non-empty.
    pub fn close(s: &str) -> Option<usize> {
        enclosed_by(s, Self::TICK)
    }
}

/// Shared by the single-character wrappers: the closing `delim` after a
/// non-empty run that does not contain it.
pub(crate) fn enclosed_by(s: &str, delim: u8) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&delim) {
        return None;
    }
    let end = 1 + b[1..].iter().position(|&c| c == delim)?;
    (end > 1).then_some(end)
}
