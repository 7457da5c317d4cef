use super::code_span::enclosed_by;

/// Inline `$formula$`. Whether the content is really math is decided by
/// the consumer, not the tokenizer.
pub struct MathSpan;

impl MathSpan {
    pub const DOLLAR: u8 = b'$';

    pub fn close(s: &str) -> Option<usize> {
        enclosed_by(s, Self::DOLLAR)
    }
}
