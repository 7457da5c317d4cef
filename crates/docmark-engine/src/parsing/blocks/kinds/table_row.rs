/// Pipe table line syntax.
pub struct TableRow;

impl TableRow {
    pub const DELIMITER: char = '|';

    /// Any line holding a pipe can carry table cells.
    pub fn has_delimiter(line: &str) -> bool {
        line.contains(Self::DELIMITER)
    }

    /// A row framed by a pipe on either side.
    pub fn is_framed(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::DELIMITER) || t.ends_with(Self::DELIMITER)
    }

    /// The alignment row under the header: only `:`, `-`, `|` and whitespace,
    /// with at least one pipe and one dash.
    pub fn is_separator(line: &str) -> bool {
        let t = line.trim();
        t.contains(Self::DELIMITER)
            && t.contains('-')
            && t.chars()
                .all(|c| matches!(c, ':' | '-' | '|') || c.is_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :--- | :---: | ---: |", true)]
    #[case("---|---", true)]
    #[case("---", false)]
    #[case("| a | b |", false)]
    #[case("|   |", false)]
    fn separator(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableRow::is_separator(line), expected);
    }

    #[test]
    fn framed_rows() {
        assert!(TableRow::is_framed("| a | b |"));
        assert!(TableRow::is_framed("a | b |"));
        assert!(!TableRow::is_framed("a | b"));
    }
}
