use crate::parsing::blocks::{ListItem, ListItemKind};

const BULLETS: [char; 4] = ['•', '◦', '▪', '‣'];

/// Per-level counters for one list block.
///
/// Level 0 counts `1.`, level 1 `a)`, deeper levels `i.`. Returning to a
/// shallower level resets everything below it.
#[derive(Debug, Default)]
pub struct ListNumbering {
    counters: Vec<usize>,
}

impl ListNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker for the next item, without trailing space.
    pub fn marker(&mut self, item: &ListItem, ordered: bool) -> String {
        self.counters.truncate(item.level + 1);
        self.counters.resize(item.level + 1, 0);
        self.counters[item.level] += 1;
        let count = self.counters[item.level];

        match item.kind {
            ListItemKind::Task { checked: true } => "☑".to_string(),
            ListItemKind::Task { checked: false } => "☐".to_string(),
            ListItemKind::Item if ordered => ordered_marker(item.level, count),
            ListItemKind::Item => BULLETS[item.level % BULLETS.len()].to_string(),
        }
    }
}

fn ordered_marker(level: usize, count: usize) -> String {
    match level {
        0 => format!("{count}."),
        1 => format!("{})", alphabetic(count)),
        _ => format!("{}.", roman(count)),
    }
}

/// 1 → a, 26 → z, 27 → aa.
fn alphabetic(mut n: usize) -> String {
    let mut out = vec![];
    while n > 0 {
        n -= 1;
        out.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    out.iter().rev().collect()
}

fn roman(mut n: usize) -> String {
    const TABLE: [(usize, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(level: usize) -> ListItem {
        ListItem {
            level,
            kind: ListItemKind::Item,
            text: String::new(),
        }
    }

    #[test]
    fn ordered_levels_and_reset() {
        let mut numbering = ListNumbering::new();
        let markers: Vec<_> = [0, 1, 1, 2, 2, 1, 0, 1]
            .into_iter()
            .map(|level| numbering.marker(&item(level), true))
            .collect();
        assert_eq!(
            markers,
            vec!["1.", "a)", "b)", "i.", "ii.", "c)", "2.", "a)"]
        );
    }

    #[test]
    fn bullets_cycle_by_level() {
        let mut numbering = ListNumbering::new();
        let markers: Vec<_> = (0..5)
            .map(|level| numbering.marker(&item(level), false))
            .collect();
        assert_eq!(markers, vec!["•", "◦", "▪", "‣", "•"]);
    }

    #[test]
    fn tasks_use_checkboxes() {
        let mut numbering = ListNumbering::new();
        let task = |checked| ListItem {
            level: 0,
            kind: ListItemKind::Task { checked },
            text: String::new(),
        };
        assert_eq!(numbering.marker(&task(false), true), "☐");
        assert_eq!(numbering.marker(&task(true), false), "☑");
    }

    #[rstest]
    #[case(1, "a", "i")]
    #[case(4, "d", "iv")]
    #[case(9, "i", "ix")]
    #[case(14, "n", "xiv")]
    #[case(27, "aa", "xxvii")]
    fn counters(#[case] n: usize, #[case] letters: &str, #[case] numerals: &str) {
        assert_eq!(alphabetic(n), letters);
        assert_eq!(roman(n), numerals);
    }
}
