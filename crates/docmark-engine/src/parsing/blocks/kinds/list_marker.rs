/// A recognized list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Indentation width in columns, tabs counting as two.
    pub indent: usize,
    pub ordered: bool,
    /// `Some(checked)` for `[ ]` / `[x]` task items.
    pub task: Option<bool>,
    pub text: &'a str,
}

impl<'a> ListMarker<'a> {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// Columns of indentation per nesting level.
    pub const INDENT_PER_LEVEL: usize = 2;
    const TAB_WIDTH: usize = 2;

    /// Recognizes `- x`, `* x`, `+ x` and `N. x` lines. The marker must be
    /// followed by whitespace.
    pub fn parse(line: &'a str) -> Option<Self> {
        let body = line.trim_start_matches([' ', '\t']);
        let indent: usize = line[..line.len() - body.len()]
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();

        let (ordered, after_marker) = if let Some(rest) = body.strip_prefix(Self::BULLETS) {
            (false, rest)
        } else {
            let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                return None;
            }
            (true, body[digits..].strip_prefix('.')?)
        };

        if !after_marker.starts_with(char::is_whitespace) {
            return None;
        }
        let text = after_marker.trim_start();
        let (task, text) = match Self::task(text) {
            Some((checked, rest)) => (Some(checked), rest),
            None => (None, text),
        };

        Some(Self {
            indent,
            ordered,
            task,
            text,
        })
    }

    pub fn level(&self) -> usize {
        self.indent / Self::INDENT_PER_LEVEL
    }

    fn task(text: &str) -> Option<(bool, &str)> {
        let rest = text.strip_prefix('[')?;
        let mut chars = rest.chars();
        let checked = match chars.next()? {
            ' ' => false,
            'x' | 'X' => true,
            _ => return None,
        };
        let rest = chars.as_str().strip_prefix(']')?;
        Some((checked, rest.trim_start()))
    }
}
