/// Horizontal rule: three or more of the same `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::MARKERS.contains(&first) && t.len() >= 3 && t.chars().all(|c| c == first)
    }
}
