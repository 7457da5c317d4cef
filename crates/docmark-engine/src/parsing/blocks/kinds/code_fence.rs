use serde::Serialize;

/// Which marker opened a fenced code block. Only the same marker closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Fence signature of a line, ignoring surrounding whitespace.
    pub fn sig(line: &str) -> Option<FenceKind> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// Recognizes an opening fence and returns its kind and info string.
    pub fn open(line: &str) -> Option<(FenceKind, &str)> {
        let kind = Self::sig(line)?;
        let info = line.trim().trim_start_matches(kind.marker()).trim();
        Some((kind, info))
    }

    /// A fence line of the same kind with nothing after the marker run.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        Self::open(line).is_some_and(|(k, info)| k == kind && info.is_empty())
    }
}
