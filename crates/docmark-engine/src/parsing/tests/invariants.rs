use crate::parsing::blocks::BlockNode;

/// Validates parser output invariants against the source text.
///
/// Asserts that:
/// - Every block's line range is well-formed and inside the source
/// - `start_line` never decreases and blocks never step back over each other
/// - Every non-blank source line is covered by some block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[BlockNode]) {
    let lines: Vec<&str> = source.split('\n').collect();

    for b in blocks {
        assert!(
            1 <= b.start_line && b.start_line <= b.end_line && b.end_line <= lines.len(),
            "block lines out of bounds: {}..={} (source has {} lines) in {:?}",
            b.start_line,
            b.end_line,
            lines.len(),
            b.kind
        );
    }

    for pair in blocks.windows(2) {
        assert!(
            pair[1].start_line >= pair[0].end_line,
            "blocks out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }

    for (i, line) in lines.iter().enumerate() {
        let n = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        assert!(
            blocks.iter().any(|b| b.start_line <= n && n <= b.end_line),
            "line {n} ({line:?}) is not covered by any block"
        );
    }
}
