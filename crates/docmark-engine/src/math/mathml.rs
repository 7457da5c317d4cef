//! Reading MathML markup into a [`MathNode`] tree.
//!
//! Element names are matched without their namespace. Annotations are
//! skipped; elements without a dedicated variant become
//! [`MathNode::Other`] so their content survives the rewrite.

use roxmltree::{Document, Node};

use super::MathError;
use super::node::MathNode;

/// Parses a `<math>` document. Fails on markup that is not well-formed XML
/// or nests deeper than `depth_limit`.
pub fn parse_mathml(markup: &str, depth_limit: usize) -> Result<MathNode, MathError> {
    let doc = Document::parse(markup)?;
    let reader = Reader { depth_limit };
    Ok(reader
        .element(doc.root_element(), 0)?
        .unwrap_or(MathNode::Row(vec![])))
}

struct Reader {
    depth_limit: usize,
}

impl Reader {
    fn element(&self, node: Node<'_, '_>, depth: usize) -> Result<Option<MathNode>, MathError> {
        if depth > self.depth_limit {
            return Err(MathError::TooDeep {
                limit: self.depth_limit,
            });
        }

        let tag = node.tag_name().name();
        let parsed = match tag {
            "annotation" | "annotation-xml" => return Ok(None),
            "math" | "mrow" => MathNode::Row(self.children(node, depth)?),
            "mi" => MathNode::Identifier(token_text(node)),
            "mn" => MathNode::Number(token_text(node)),
            "mo" => MathNode::Operator(token_text(node)),
            "mtext" | "ms" => MathNode::Text(node.text().unwrap_or_default().to_string()),
            "mspace" => MathNode::Space,
            "msqrt" => MathNode::Sqrt(self.children(node, depth)?),
            "mfenced" => MathNode::Fenced {
                open: node.attribute("open").unwrap_or("(").to_string(),
                close: node.attribute("close").unwrap_or(")").to_string(),
                body: self.children(node, depth)?,
            },
            "mtable" => MathNode::Table(self.rows(node, depth)?),
            "mfrac" | "msup" | "msub" | "msubsup" | "mroot" | "mover" | "munder"
            | "munderover" => self.scripted(node, tag, depth)?,
            _ => MathNode::Other {
                tag: tag.to_string(),
                text: node
                    .text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
                children: self.children(node, depth)?,
            },
        };
        Ok(Some(parsed))
    }

    /// Element children in order, with n-ary operators taking the element
    /// that follows them as their body.
    fn children(&self, node: Node<'_, '_>, depth: usize) -> Result<Vec<MathNode>, MathError> {
        let mut out: Vec<MathNode> = vec![];
        for child in node.children().filter(Node::is_element) {
            let Some(parsed) = self.element(child, depth + 1)? else {
                continue;
            };
            match out.last_mut() {
                Some(MathNode::Nary { body: body @ None, .. }) => {
                    *body = Some(Box::new(parsed));
                }
                _ => out.push(parsed),
            }
        }
        Ok(out)
    }

    fn rows(
        &self,
        table: Node<'_, '_>,
        depth: usize,
    ) -> Result<Vec<Vec<Vec<MathNode>>>, MathError> {
        let mut rows = vec![];
        for row in table.children().filter(Node::is_element) {
            if !matches!(row.tag_name().name(), "mtr" | "mlabeledtr") {
                continue;
            }
            let mut cells = vec![];
            for cell in row.children().filter(|c| c.has_tag_name("mtd")) {
                cells.push(self.children(cell, depth + 2)?);
            }
            rows.push(cells);
        }
        Ok(rows)
    }

    /// Elements whose children are positional.
    fn scripted(&self, node: Node<'_, '_>, tag: &str, depth: usize) -> Result<MathNode, MathError> {
        let mut parts = vec![];
        for child in node.children().filter(Node::is_element) {
            if let Some(parsed) = self.element(child, depth + 1)? {
                parts.push(parsed);
            }
        }
        let mut parts = parts.into_iter().map(Box::new);
        let (first, second, third) = (parts.next(), parts.next(), parts.next());

        if let Some(op) = first.as_deref().and_then(MathNode::nary_glyph) {
            let op = op.to_string();
            let limits = matches!(tag, "munder" | "mover" | "munderover");
            let nary = match tag {
                "msub" | "munder" => Some((second.clone(), None)),
                "msup" | "mover" => Some((None, second.clone())),
                "msubsup" | "munderover" => Some((second.clone(), third.clone())),
                _ => None,
            };
            if let Some((sub, sup)) = nary {
                return Ok(MathNode::Nary {
                    op,
                    sub,
                    sup,
                    body: None,
                    limits,
                });
            }
        }

        Ok(match tag {
            "mfrac" => MathNode::Fraction {
                num: first,
                den: second,
                bar: node.attribute("linethickness") != Some("0"),
            },
            "msup" => MathNode::Superscript {
                base: first,
                sup: second,
            },
            "msub" => MathNode::Subscript {
                base: first,
                sub: second,
            },
            "msubsup" => MathNode::SubSup {
                base: first,
                sub: second,
                sup: third,
            },
            "mroot" => MathNode::Root {
                radicand: first,
                index: second,
            },
            "mover" => MathNode::Over {
                base: first,
                mark: second,
                accent: node.attribute("accent") == Some("true"),
            },
            "munder" => MathNode::Under {
                base: first,
                mark: second,
            },
            // munderover over something that is not a large operator
            _ => MathNode::Over {
                base: Some(Box::new(MathNode::Under {
                    base: first,
                    mark: second,
                })),
                mark: third,
                accent: false,
            },
        })
    }
}

/// Leaf token text with surrounding whitespace removed.
fn token_text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NS: &str = r#"xmlns="http://www.w3.org/1998/Math/MathML""#;

    fn parse(body: &str) -> MathNode {
        parse_mathml(&format!("<math {NS}>{body}</math>"), 32).unwrap()
    }

    fn boxed(node: MathNode) -> Option<Box<MathNode>> {
        Some(Box::new(node))
    }

    #[test]
    fn tokens_and_rows() {
        assert_eq!(
            parse("<mi>x</mi><mo>=</mo><mn>1.5</mn><mtext>if </mtext>"),
            MathNode::Row(vec![
                MathNode::Identifier("x".into()),
                MathNode::Operator("=".into()),
                MathNode::Number("1.5".into()),
                MathNode::Text("if ".into()),
            ])
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            parse("<mo>&lt;</mo>"),
            MathNode::Row(vec![MathNode::Operator("<".into())])
        );
    }

    #[test]
    fn fraction_with_missing_denominator_keeps_numerator() {
        assert_eq!(
            parse("<mfrac><mi>a</mi></mfrac>"),
            MathNode::Row(vec![MathNode::Fraction {
                num: boxed(MathNode::Identifier("a".into())),
                den: None,
                bar: true,
            }])
        );
    }

    #[test]
    fn sum_takes_following_element_as_body() {
        let tree = parse(
            "<munderover><mo>∑</mo><mi>i</mi><mi>n</mi></munderover><mi>i</mi><mo>+</mo>",
        );
        assert_eq!(
            tree,
            MathNode::Row(vec![
                MathNode::Nary {
                    op: "∑".into(),
                    sub: boxed(MathNode::Identifier("i".into())),
                    sup: boxed(MathNode::Identifier("n".into())),
                    body: boxed(MathNode::Identifier("i".into())),
                    limits: true,
                },
                MathNode::Operator("+".into()),
            ])
        );
    }

    #[test]
    fn integral_with_scripts_is_nary_without_limits() {
        let MathNode::Row(children) = parse("<msubsup><mo>∫</mo><mn>0</mn><mn>1</mn></msubsup>")
        else {
            panic!("expected row");
        };
        assert!(matches!(
            &children[0],
            MathNode::Nary { op, limits: false, body: None, .. } if op == "∫"
        ));
    }

    #[test]
    fn mfenced_defaults_to_parentheses() {
        assert_eq!(
            parse("<mfenced><mi>x</mi></mfenced>"),
            MathNode::Row(vec![MathNode::Fenced {
                open: "(".into(),
                close: ")".into(),
                body: vec![MathNode::Identifier("x".into())],
            }])
        );
    }

    #[test]
    fn table_cells_keep_all_children() {
        assert_eq!(
            parse("<mtable><mtr><mtd><mi>x</mi><mo>&gt;</mo><mn>0</mn></mtd></mtr></mtable>"),
            MathNode::Row(vec![MathNode::Table(vec![vec![vec![
                MathNode::Identifier("x".into()),
                MathNode::Operator(">".into()),
                MathNode::Number("0".into()),
            ]]])])
        );
    }

    #[test]
    fn annotations_are_skipped_and_unknown_elements_kept() {
        let tree = parse(
            "<semantics><mi>x</mi><annotation encoding=\"TeX\">x</annotation></semantics>",
        );
        assert_eq!(
            tree,
            MathNode::Row(vec![MathNode::Other {
                tag: "semantics".into(),
                text: None,
                children: vec![MathNode::Identifier("x".into())],
            }])
        );
    }

    #[test]
    fn depth_limit_is_enforced() {
        let deep = format!("{}<mi>x</mi>{}", "<mrow>".repeat(10), "</mrow>".repeat(10));
        assert!(matches!(
            parse_mathml(&format!("<math {NS}>{deep}</math>"), 5),
            Err(MathError::TooDeep { limit: 5 })
        ));
        assert!(parse_mathml(&format!("<math {NS}>{deep}</math>"), 20).is_ok());
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(matches!(
            parse_mathml("<math><mi>x</math>", 8),
            Err(MathError::Markup(_))
        ));
    }
}
