/// Display math delimited by `$$`.
///
/// A line either holds a complete `$$f$$` formula (possibly followed by more
/// text) or opens a region that runs until a line ending in `$$`.
pub struct MathFence;

impl MathFence {
    pub const DELIMITER: &'static str = "$$";

    /// Splits `$$f$$rest` into the formula and the remainder. The formula
    /// must hold at least one character.
    pub fn single(line: &str) -> Option<(&str, &str)> {
        let rest = line.trim().strip_prefix(Self::DELIMITER)?;
        let first = rest.chars().next()?;
        let from = first.len_utf8();
        let end = from + rest[from..].find(Self::DELIMITER)?;
        Some((&rest[..end], &rest[end + Self::DELIMITER.len()..]))
    }

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::DELIMITER)
    }

    pub fn closes(line: &str) -> bool {
        line.trim().ends_with(Self::DELIMITER)
    }

    /// True when the line starts a multi-line region, i.e. it opens and is
    /// not closed on the same line.
    pub fn opens_region(line: &str) -> bool {
        if !Self::opens(line) || Self::single(line).is_some() {
            return false;
        }
        let after = &line.trim()[Self::DELIMITER.len()..];
        !after.trim_end().ends_with(Self::DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_formula() {
        assert_eq!(MathFence::single("$$x^2$$"), Some(("x^2", "")));
        assert_eq!(MathFence::single("  $$ a $$ tail"), Some((" a ", " tail")));
    }

    #[test]
    fn single_line_keeps_following_formula_as_remainder() {
        assert_eq!(MathFence::single("$$x^2$$$$y^2$$"), Some(("x^2", "$$y^2$$")));
    }

    #[test]
    fn lone_delimiter_opens_region() {
        assert_eq!(MathFence::single("$$"), None);
        assert!(MathFence::opens_region("$$"));
        assert!(MathFence::opens_region("$$ a = b"));
    }

    #[test]
    fn empty_pair_does_not_open_region() {
        assert_eq!(MathFence::single("$$$$"), None);
        assert!(!MathFence::opens_region("$$$$"));
    }

    #[test]
    fn closing_line() {
        assert!(MathFence::closes("c + d $$"));
        assert!(!MathFence::closes("c + d"));
    }
}
