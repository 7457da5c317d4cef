use super::kinds::{
    BlockQuote, CodeFence, FenceKind, Heading, ListMarker, MathFence, StandaloneImage, TableRow,
    ThematicBreak,
};

/// A block opener recognized at a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { kind: FenceKind, info: &'a str },
    Table,
    /// `$$f$$` on one line, with whatever follows the closing delimiter.
    InlineMath { latex: &'a str, rest: &'a str },
    /// `$$` region opener; `first` is the text after the delimiter.
    MathRegion { first: &'a str },
    Heading { level: usize, text: &'a str },
    Quote,
    List { ordered: bool },
    Rule,
    Image { alt: &'a str, url: &'a str },
}

/// Tries every opener in precedence order. `next` is the following line,
/// needed for the table lookahead.
pub fn try_open_leaf<'a>(line: &'a str, next: Option<&str>) -> Option<BlockOpen<'a>> {
    if let Some((kind, info)) = CodeFence::open(line) {
        return Some(BlockOpen::FencedCode { kind, info });
    }
    if TableRow::has_delimiter(line) && next.is_some_and(TableRow::is_separator) {
        return Some(BlockOpen::Table);
    }
    if let Some((latex, rest)) = MathFence::single(line) {
        return Some(BlockOpen::InlineMath { latex, rest });
    }
    if MathFence::opens(line) {
        let first = &line.trim()[MathFence::DELIMITER.len()..];
        return Some(BlockOpen::MathRegion { first });
    }
    if let Some((level, text)) = Heading::parse(line) {
        return Some(BlockOpen::Heading { level, text });
    }
    if BlockQuote::strip(line).is_some() {
        return Some(BlockOpen::Quote);
    }
    if let Some(item) = ListMarker::parse(line) {
        return Some(BlockOpen::List {
            ordered: item.ordered,
        });
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::Rule);
    }
    if let Some((alt, url)) = StandaloneImage::parse(line) {
        return Some(BlockOpen::Image { alt, url });
    }
    None
}
