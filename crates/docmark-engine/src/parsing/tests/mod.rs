//! Whole-pipeline tests over the fixture documents in `fixtures/`.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    normalize, parse_document,
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"))
}

fn outline(blocks: &[BlockNode]) -> Vec<(&'static str, usize)> {
    blocks
        .iter()
        .map(|b| (b.kind.name(), b.start_line))
        .collect()
}

#[rstest]
#[case("chat_answer")]
#[case("lists")]
#[case("math")]
#[case("unterminated")]
#[case("crlf_and_zero_width")]
fn fixture_invariants(#[case] name: &str) {
    let md = fixture(name).replace("\r\n", "\n");
    let doc = parse_document(&md);
    invariants::check(&md, &doc.blocks);
}

#[rstest]
#[case("chat_answer")]
#[case("lists")]
#[case("math")]
#[case("unterminated")]
fn fixture_normalization_is_idempotent(#[case] name: &str) {
    let once = normalize(&fixture(name));
    assert_eq!(normalize(&once), once);
}

#[test]
fn chat_answer_blocks() {
    let doc = parse_document(&fixture("chat_answer"));
    assert_eq!(
        outline(&doc.blocks),
        vec![
            ("paragraph", 1),
            ("heading", 2),
            ("paragraph", 3),
            ("math_block", 4),
            ("paragraph", 5),
            ("heading", 6),
            ("list", 7),
            ("list", 9),
            ("list", 10),
            ("table", 11),
            ("quote", 15),
            ("hr", 16),
            ("code_block", 17),
            ("paragraph", 24),
        ]
    );

    let BlockKind::CodeBlock { language, code } = &doc.blocks[12].kind else {
        panic!("expected code block, got {:?}", doc.blocks[12].kind);
    };
    assert_eq!(language.as_deref(), Some("python"));
    assert!(code.contains("\n\n    return d"));
}

#[test]
fn lists_fixture_levels() {
    let doc = parse_document(&fixture("lists"));
    let shapes: Vec<(bool, Vec<usize>)> = doc
        .blocks
        .iter()
        .map(|b| match &b.kind {
            BlockKind::List { ordered, items } => {
                (*ordered, items.iter().map(|i| i.level).collect())
            }
            other => panic!("expected only lists, got {other:?}"),
        })
        .collect();
    assert_eq!(
        shapes,
        vec![
            (false, vec![0, 1, 2, 0, 0]),
            (true, vec![0, 0, 1]),
            (false, vec![0, 0]),
        ]
    );
}

#[test]
fn math_fixture_blocks() {
    let doc = parse_document(&fixture("math"));
    assert_eq!(
        outline(&doc.blocks),
        vec![
            ("paragraph", 1),
            ("math_block", 2),
            ("math_block", 5),
            ("math_block", 5),
            ("paragraph", 5),
            ("math_block", 6),
            ("math_block", 8),
        ]
    );

    let latex: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(|b| match &b.kind {
            BlockKind::MathBlock { latex } => Some(latex.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        latex,
        vec![
            r"\sum_{i=1}^{n} i = \frac{n(n+1)}{2}",
            "E = mc^2",
            "F = ma",
            "\\int_0^1 x \\, dx\n= \\frac{1}{2}",
            r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}",
        ]
    );
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Paragraph {
            text: "Inline $a^2 + b^2 = c^2$ and display:".into()
        }
    );
}

#[test]
fn unterminated_math_swallows_the_rest() {
    let doc = parse_document(&fixture("unterminated"));
    assert_eq!(
        outline(&doc.blocks),
        vec![("heading", 1), ("paragraph", 2), ("math_block", 3)]
    );
    assert_eq!(doc.blocks[2].end_line, 7);
}

#[test]
fn crlf_and_zero_width_are_cleaned() {
    let doc = parse_document(&fixture("crlf_and_zero_width"));
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::Heading {
            level: 1,
            text: "Title".into()
        }
    );
    assert_eq!(
        doc.blocks[1].kind,
        BlockKind::Paragraph {
            text: "Line with a zerowidth space.".into()
        }
    );
    assert_eq!(outline(&doc.blocks)[2], ("table", 3));
}

#[test]
fn start_lines_refer_to_source_not_normalized_text() {
    let doc = parse_document("intro\n# A\nbody\n- x");
    assert_eq!(
        outline(&doc.blocks),
        vec![("paragraph", 1), ("heading", 2), ("paragraph", 3), ("list", 4)]
    );
}
