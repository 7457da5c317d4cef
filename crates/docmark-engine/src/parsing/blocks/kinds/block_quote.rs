/// Blockquote line syntax.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` prefix (after up to three spaces of indentation) and
    /// the whitespace around the content. Returns `None` for other lines.
    pub fn strip(line: &str) -> Option<&str> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        line[indent..].strip_prefix(Self::PREFIX).map(str::trim)
    }
}
