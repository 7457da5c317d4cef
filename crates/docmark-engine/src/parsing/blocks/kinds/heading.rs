/// ATX heading syntax: a run of `#` followed by whitespace or end of line.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the raw marker count and the trimmed title.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        if level == 0 {
            return None;
        }
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("### Title", Some((3, "Title")))]
    #[case("##   spaced  ", Some((2, "spaced")))]
    #[case("#", Some((1, "")))]
    #[case("######## deep", Some((8, "deep")))]
    #[case("#hashtag", None)]
    #[case(" # indented", None)]
    #[case("plain", None)]
    fn parse_heading(#[case] line: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
