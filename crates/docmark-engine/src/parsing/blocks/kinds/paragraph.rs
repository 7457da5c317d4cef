/// Paragraph block type (marker struct).
///
/// Paragraphs are the default block when no other opener matches. Their
/// source lines are soft-wrapped: joined with single spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
