//! Pipe table cells and alignment.

use serde::{Deserialize, Serialize};

use super::blocks::kinds::TableRow;

const ESCAPE: char = '\\';

/// Column alignment taken from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Alignment used for columns whose separator cell carries no colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    #[default]
    Left,
    Center,
}

impl From<AlignmentPolicy> for Alignment {
    fn from(policy: AlignmentPolicy) -> Self {
        match policy {
            AlignmentPolicy::Left => Alignment::Left,
            AlignmentPolicy::Center => Alignment::Center,
        }
    }
}

impl Alignment {
    /// `:-:` is center, `-:` right, `:-` left. A lone `:` counts as a
    /// leading colon. Anything else follows `policy`.
    pub fn from_separator_cell(cell: &str, policy: AlignmentPolicy) -> Self {
        let cell = cell.trim();
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) if cell.len() > 1 => Alignment::Center,
            (true, _) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => policy.into(),
        }
    }
}

/// Splits one table row into trimmed cells.
///
/// `\|` is a literal pipe. `\\` is kept as written and does not escape the
/// character after it. Any other pipe ends a cell. The empty cells produced
/// by a leading or trailing frame pipe are dropped.
pub fn split_cells(row: &str) -> Vec<String> {
    let row = row.trim();
    let mut cells = vec![];
    let mut current = String::new();
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&TableRow::DELIMITER) => {
                current.push(TableRow::DELIMITER);
                chars.next();
            }
            ESCAPE if chars.peek() == Some(&ESCAPE) => {
                current.push_str("\\\\");
                chars.next();
            }
            TableRow::DELIMITER => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() || !cells.is_empty() {
        cells.push(current.trim().to_string());
    }

    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}

/// A parsed pipe table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub alignments: Vec<Alignment>,
    /// Data rows as written; they may hold more or fewer cells than the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses the raw lines of a table block.
    ///
    /// Returns `None` when there is no header plus separator pair; callers
    /// fall back to rendering the lines as paragraph text. A table with no
    /// data rows is valid.
    pub fn parse(raw: &str, policy: AlignmentPolicy) -> Option<Self> {
        let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
        let header = lines.next()?;
        let separator = lines.next()?;
        if !TableRow::is_separator(separator) {
            return None;
        }

        let headers = split_cells(header);
        let alignments = split_cells(separator)
            .iter()
            .map(|cell| Alignment::from_separator_cell(cell, policy))
            .collect();
        let rows = lines
            .map(split_cells)
            .filter(|row| !row.is_empty())
            .collect();

        Some(Self {
            headers,
            alignments,
            rows,
        })
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Alignment of column `col`, defaulting to `policy` past the separator's width.
    pub fn alignment(&self, col: usize, policy: AlignmentPolicy) -> Alignment {
        self.alignments.get(col).copied().unwrap_or(policy.into())
    }
}
