//! Office Math (OMML) output tree and the rewrite from [`MathNode`].
//!
//! ```text
//! MathNode::Fraction  → <m:f>      MathNode::Nary    → <m:nary>
//! MathNode::SubSup    → <m:sSubSup> MathNode::Over    → <m:acc> / <m:limUpp>
//! MathNode::Table     → <m:m>      MathNode::Fenced  → <m:d>
//! ```

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::{debug, warn};

use super::node::MathNode;

pub const OMML_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// Wrappers that carry presentation hints only. Their content is kept and
/// the hint dropped.
const TRANSPARENT: &[&str] = &[
    "mstyle", "merror", "mpadded", "mphantom", "menclose", "semantics", "maction",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OmmlNode {
    /// `normal` runs are upright text (`<m:nor/>`).
    Run {
        text: String,
        normal: bool,
    },
    Fraction {
        num: Vec<OmmlNode>,
        den: Vec<OmmlNode>,
        bar: bool,
    },
    Sup {
        base: Vec<OmmlNode>,
        sup: Vec<OmmlNode>,
    },
    Sub {
        base: Vec<OmmlNode>,
        sub: Vec<OmmlNode>,
    },
    SubSup {
        base: Vec<OmmlNode>,
        sub: Vec<OmmlNode>,
        sup: Vec<OmmlNode>,
    },
    Radical {
        degree: Option<Vec<OmmlNode>>,
        body: Vec<OmmlNode>,
    },
    Nary {
        chr: String,
        sub: Option<Vec<OmmlNode>>,
        sup: Option<Vec<OmmlNode>>,
        body: Vec<OmmlNode>,
        limits: bool,
    },
    Accent {
        chr: String,
        body: Vec<OmmlNode>,
    },
    LimUpp {
        body: Vec<OmmlNode>,
        lim: Vec<OmmlNode>,
    },
    LimLow {
        body: Vec<OmmlNode>,
        lim: Vec<OmmlNode>,
    },
    Matrix(Vec<Vec<Vec<OmmlNode>>>),
    Delimiter {
        open: String,
        close: String,
        body: Vec<OmmlNode>,
    },
}

/// One `<m:oMath>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmmlMath {
    pub children: Vec<OmmlNode>,
}

impl OmmlMath {
    pub fn from_mathml(root: &MathNode) -> Self {
        let mut children = vec![];
        rewrite(root, &mut children);
        Self { children }
    }

    pub fn to_xml(&self) -> String {
        let mut out = format!(r#"<m:oMath xmlns:m="{OMML_NS}">"#);
        write_nodes(&mut out, &self.children);
        out.push_str("</m:oMath>");
        out
    }

    /// Unicode rendering on one line, e.g. `a/(b+c)` or `∑_(i=1)^n i`.
    pub fn linear_text(&self) -> String {
        linear(&self.children)
    }
}

/// Appends the OMML for `node` to `out`.
pub fn rewrite(node: &MathNode, out: &mut Vec<OmmlNode>) {
    let run = |text: &str, normal| OmmlNode::Run {
        text: text.to_string(),
        normal,
    };

    match node {
        MathNode::Row(children) => children.iter().for_each(|c| rewrite(c, out)),
        MathNode::Identifier(s) | MathNode::Number(s) | MathNode::Operator(s) => {
            out.push(run(s, false))
        }
        MathNode::Text(s) => out.push(run(s, true)),
        MathNode::Space => out.push(run(" ", false)),
        MathNode::Fraction { num, den, bar } => out.push(OmmlNode::Fraction {
            num: part(num),
            den: part(den),
            bar: *bar,
        }),
        MathNode::Superscript { base, sup } => out.push(OmmlNode::Sup {
            base: part(base),
            sup: part(sup),
        }),
        MathNode::Subscript { base, sub } => out.push(OmmlNode::Sub {
            base: part(base),
            sub: part(sub),
        }),
        MathNode::SubSup { base, sub, sup } => out.push(OmmlNode::SubSup {
            base: part(base),
            sub: part(sub),
            sup: part(sup),
        }),
        MathNode::Sqrt(children) => out.push(OmmlNode::Radical {
            degree: None,
            body: all(children),
        }),
        MathNode::Root { radicand, index } => out.push(OmmlNode::Radical {
            degree: Some(part(index)),
            body: part(radicand),
        }),
        MathNode::Nary {
            op,
            sub,
            sup,
            body,
            limits,
        } => out.push(OmmlNode::Nary {
            chr: op.clone(),
            sub: sub.as_deref().map(one),
            sup: sup.as_deref().map(one),
            body: part(body),
            limits: *limits,
        }),
        MathNode::Over { base, mark, accent } => match mark.as_deref() {
            Some(MathNode::Operator(chr)) if *accent => out.push(OmmlNode::Accent {
                chr: chr.clone(),
                body: part(base),
            }),
            _ => out.push(OmmlNode::LimUpp {
                body: part(base),
                lim: part(mark),
            }),
        },
        MathNode::Under { base, mark } => out.push(OmmlNode::LimLow {
            body: part(base),
            lim: part(mark),
        }),
        MathNode::Table(rows) => out.push(OmmlNode::Matrix(
            rows.iter()
                .map(|row| row.iter().map(|cell| all(cell)).collect())
                .collect(),
        )),
        MathNode::Fenced { open, close, body } => out.push(OmmlNode::Delimiter {
            open: open.clone(),
            close: close.clone(),
            body: all(body),
        }),
        MathNode::Other {
            tag,
            text,
            children,
        } => {
            if TRANSPARENT.contains(&tag.as_str()) {
                debug!("Unwrapping <{tag}>");
            } else {
                warn!("No OMML equivalent for <{tag}>, keeping its content");
            }
            children.iter().for_each(|c| rewrite(c, out));
            if let Some(text) = text {
                out.push(run(text, false));
            }
        }
    }
}

fn one(node: &MathNode) -> Vec<OmmlNode> {
    let mut out = vec![];
    rewrite(node, &mut out);
    out
}

/// A positional child; missing ones give an empty container.
fn part(node: &Option<Box<MathNode>>) -> Vec<OmmlNode> {
    node.as_deref().map(one).unwrap_or_default()
}

fn all(nodes: &[MathNode]) -> Vec<OmmlNode> {
    let mut out = vec![];
    nodes.iter().for_each(|n| rewrite(n, &mut out));
    out
}

fn write_nodes(out: &mut String, nodes: &[OmmlNode]) {
    for node in nodes {
        write_node(out, node);
    }
}

/// `<m:tag>…</m:tag>`, or `<m:tag/>` when empty.
fn container(out: &mut String, tag: &str, nodes: &[OmmlNode]) {
    if nodes.is_empty() {
        let _ = write!(out, "<m:{tag}/>");
    } else {
        let _ = write!(out, "<m:{tag}>");
        write_nodes(out, nodes);
        let _ = write!(out, "</m:{tag}>");
    }
}

fn val(out: &mut String, tag: &str, value: &str) {
    let _ = write!(
        out,
        r#"<m:{tag} m:val="{}"/>"#,
        encode_double_quoted_attribute(value)
    );
}

fn write_node(out: &mut String, node: &OmmlNode) {
    match node {
        OmmlNode::Run { text, normal } => {
            out.push_str("<m:r>");
            if *normal {
                out.push_str("<m:rPr><m:nor/></m:rPr>");
            }
            let preserve = text.starts_with(char::is_whitespace)
                || text.ends_with(char::is_whitespace);
            out.push_str(if preserve {
                r#"<m:t xml:space="preserve">"#
            } else {
                "<m:t>"
            });
            out.push_str(&encode_text(text));
            out.push_str("</m:t></m:r>");
        }
        OmmlNode::Fraction { num, den, bar } => {
            out.push_str("<m:f>");
            if !bar {
                out.push_str("<m:fPr>");
                val(out, "type", "noBar");
                out.push_str("</m:fPr>");
            }
            container(out, "num", num);
            container(out, "den", den);
            out.push_str("</m:f>");
        }
        OmmlNode::Sup { base, sup } => {
            out.push_str("<m:sSup>");
            container(out, "e", base);
            container(out, "sup", sup);
            out.push_str("</m:sSup>");
        }
        OmmlNode::Sub { base, sub } => {
            out.push_str("<m:sSub>");
            container(out, "e", base);
            container(out, "sub", sub);
            out.push_str("</m:sSub>");
        }
        OmmlNode::SubSup { base, sub, sup } => {
            out.push_str("<m:sSubSup>");
            container(out, "e", base);
            container(out, "sub", sub);
            container(out, "sup", sup);
            out.push_str("</m:sSubSup>");
        }
        OmmlNode::Radical { degree, body } => {
            out.push_str("<m:rad>");
            match degree {
                Some(degree) => container(out, "deg", degree),
                None => {
                    out.push_str("<m:radPr>");
                    val(out, "degHide", "1");
                    out.push_str("</m:radPr><m:deg/>");
                }
            }
            container(out, "e", body);
            out.push_str("</m:rad>");
        }
        OmmlNode::Nary {
            chr,
            sub,
            sup,
            body,
            limits,
        } => {
            out.push_str("<m:nary><m:naryPr>");
            val(out, "chr", chr);
            val(out, "limLoc", if *limits { "undOvr" } else { "subSup" });
            if sub.is_none() {
                val(out, "subHide", "1");
            }
            if sup.is_none() {
                val(out, "supHide", "1");
            }
            out.push_str("</m:naryPr>");
            container(out, "sub", sub.as_deref().unwrap_or_default());
            container(out, "sup", sup.as_deref().unwrap_or_default());
            container(out, "e", body);
            out.push_str("</m:nary>");
        }
        OmmlNode::Accent { chr, body } => {
            out.push_str("<m:acc><m:accPr>");
            val(out, "chr", chr);
            out.push_str("</m:accPr>");
            container(out, "e", body);
            out.push_str("</m:acc>");
        }
        OmmlNode::LimUpp { body, lim } => {
            out.push_str("<m:limUpp>");
            container(out, "e", body);
            container(out, "lim", lim);
            out.push_str("</m:limUpp>");
        }
        OmmlNode::LimLow { body, lim } => {
            out.push_str("<m:limLow>");
            container(out, "e", body);
            container(out, "lim", lim);
            out.push_str("</m:limLow>");
        }
        OmmlNode::Matrix(rows) => {
            out.push_str("<m:m>");
            for row in rows {
                out.push_str("<m:mr>");
                for cell in row {
                    container(out, "e", cell);
                }
                out.push_str("</m:mr>");
            }
            out.push_str("</m:m>");
        }
        OmmlNode::Delimiter { open, close, body } => {
            out.push_str("<m:d><m:dPr>");
            val(out, "begChr", open);
            val(out, "endChr", close);
            out.push_str("</m:dPr>");
            container(out, "e", body);
            out.push_str("</m:d>");
        }
    }
}

fn linear(nodes: &[OmmlNode]) -> String {
    nodes.iter().map(linear_node).collect()
}

/// Parenthesizes anything but a single symbol or an alphanumeric run.
fn grouped(nodes: &[OmmlNode]) -> String {
    let text = linear(nodes);
    if text.chars().count() <= 1 || text.chars().all(char::is_alphanumeric) {
        text
    } else {
        format!("({text})")
    }
}

fn linear_node(node: &OmmlNode) -> String {
    match node {
        OmmlNode::Run { text, .. } => text.clone(),
        OmmlNode::Fraction { num, den, bar: true } => {
            format!("{}/{}", grouped(num), grouped(den))
        }
        OmmlNode::Fraction { num, den, bar: false } => {
            format!("{} over {}", grouped(num), grouped(den))
        }
        OmmlNode::Sup { base, sup } => format!("{}^{}", grouped(base), grouped(sup)),
        OmmlNode::Sub { base, sub } => format!("{}_{}", grouped(base), grouped(sub)),
        OmmlNode::SubSup { base, sub, sup } => {
            format!("{}_{}^{}", grouped(base), grouped(sub), grouped(sup))
        }
        OmmlNode::Radical { degree: None, body } => format!("√{}", grouped(body)),
        OmmlNode::Radical {
            degree: Some(degree),
            body,
        } => match linear(degree).as_str() {
            "3" => format!("∛{}", grouped(body)),
            "4" => format!("∜{}", grouped(body)),
            _ => format!("√({}&{})", linear(degree), linear(body)),
        },
        OmmlNode::Nary { chr, sub, sup, body, .. } => {
            let mut s = chr.clone();
            if let Some(sub) = sub {
                s.push('_');
                s.push_str(&grouped(sub));
            }
            if let Some(sup) = sup {
                s.push('^');
                s.push_str(&grouped(sup));
            }
            if !body.is_empty() {
                s.push(' ');
                s.push_str(&linear(body));
            }
            s
        }
        OmmlNode::Accent { chr, body } => format!("{}{chr}", grouped(body)),
        OmmlNode::LimUpp { body, lim } => format!("{}┴{}", grouped(body), grouped(lim)),
        OmmlNode::LimLow { body, lim } => format!("{}┬{}", grouped(body), grouped(lim)),
        OmmlNode::Matrix(rows) => rows
            .iter()
            .map(|row| row.iter().map(|c| linear(c)).collect::<Vec<_>>().join(" & "))
            .collect::<Vec<_>>()
            .join(" @ "),
        OmmlNode::Delimiter { open, close, body } => format!("{open}{}{close}", linear(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mathml::parse_mathml;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn omml(body: &str) -> OmmlMath {
        let markup = format!(r#"<math xmlns="http://www.w3.org/1998/Math/MathML">{body}</math>"#);
        OmmlMath::from_mathml(&parse_mathml(&markup, 64).unwrap())
    }

    fn inner_xml(body: &str) -> String {
        let xml = omml(body).to_xml();
        let open = format!(r#"<m:oMath xmlns:m="{OMML_NS}">"#);
        xml.strip_prefix(&open)
            .and_then(|s| s.strip_suffix("</m:oMath>"))
            .unwrap()
            .to_string()
    }

    #[test]
    fn fraction() {
        assert_snapshot!(
            inner_xml("<mfrac><mi>a</mi><mi>b</mi></mfrac>"),
            @"<m:f><m:num><m:r><m:t>a</m:t></m:r></m:num><m:den><m:r><m:t>b</m:t></m:r></m:den></m:f>"
        );
    }

    #[test]
    fn binomial_fraction_has_no_bar() {
        assert!(
            inner_xml(r#"<mfrac linethickness="0"><mi>n</mi><mi>k</mi></mfrac>"#)
                .starts_with(r#"<m:f><m:fPr><m:type m:val="noBar"/></m:fPr>"#)
        );
    }

    #[test]
    fn sum_with_bounds() {
        assert_snapshot!(
            inner_xml("<munderover><mo>∑</mo><mi>i</mi><mi>n</mi></munderover><mi>i</mi>"),
            @r#"<m:nary><m:naryPr><m:chr m:val="∑"/><m:limLoc m:val="undOvr"/></m:naryPr><m:sub><m:r><m:t>i</m:t></m:r></m:sub><m:sup><m:r><m:t>n</m:t></m:r></m:sup><m:e><m:r><m:t>i</m:t></m:r></m:e></m:nary>"#
        );
    }

    #[test]
    fn missing_bounds_are_hidden() {
        assert_snapshot!(
            inner_xml("<munder><mo>∑</mo><mi>i</mi></munder>"),
            @r#"<m:nary><m:naryPr><m:chr m:val="∑"/><m:limLoc m:val="undOvr"/><m:supHide m:val="1"/></m:naryPr><m:sub><m:r><m:t>i</m:t></m:r></m:sub><m:sup/><m:e/></m:nary>"#
        );
    }

    #[test]
    fn square_root_hides_degree() {
        assert_snapshot!(
            inner_xml("<msqrt><mi>x</mi></msqrt>"),
            @r#"<m:rad><m:radPr><m:degHide m:val="1"/></m:radPr><m:deg/><m:e><m:r><m:t>x</m:t></m:r></m:e></m:rad>"#
        );
    }

    #[test]
    fn accent_and_overset() {
        assert_eq!(
            inner_xml(r#"<mover accent="true"><mi>x</mi><mo>^</mo></mover>"#),
            r#"<m:acc><m:accPr><m:chr m:val="^"/></m:accPr><m:e><m:r><m:t>x</m:t></m:r></m:e></m:acc>"#
        );
        assert!(inner_xml("<mover><mo>=</mo><mi>def</mi></mover>").starts_with("<m:limUpp>"));
    }

    #[test]
    fn fenced_matrix() {
        assert_snapshot!(
            inner_xml(r#"<mfenced open="[" close="]"><mtable><mtr><mtd><mn>1</mn></mtd><mtd><mn>2</mn></mtd></mtr></mtable></mfenced>"#),
            @r#"<m:d><m:dPr><m:begChr m:val="["/><m:endChr m:val="]"/></m:dPr><m:e><m:m><m:mr><m:e><m:r><m:t>1</m:t></m:r></m:e><m:e><m:r><m:t>2</m:t></m:r></m:e></m:mr></m:m></m:e></m:d>"#
        );
    }

    #[test]
    fn text_runs_are_upright_escaped_and_preserve_spaces() {
        assert_eq!(
            inner_xml("<mtext>if </mtext><mo>&lt;</mo>"),
            concat!(
                r#"<m:r><m:rPr><m:nor/></m:rPr><m:t xml:space="preserve">if </m:t></m:r>"#,
                "<m:r><m:t>&lt;</m:t></m:r>"
            )
        );
    }

    #[test]
    fn unknown_elements_keep_children_then_text() {
        assert_eq!(
            omml("<mstyle mathvariant=\"bold\"><mi>v</mi></mstyle><mglyph>g</mglyph>").children,
            vec![
                OmmlNode::Run {
                    text: "v".into(),
                    normal: false
                },
                OmmlNode::Run {
                    text: "g".into(),
                    normal: false
                },
            ]
        );
    }

    #[test]
    fn linear_text() {
        assert_eq!(
            omml("<mfrac><mi>a</mi><mrow><mi>b</mi><mo>+</mo><mi>c</mi></mrow></mfrac>")
                .linear_text(),
            "a/(b+c)"
        );
        assert_eq!(
            omml("<munderover><mo>∑</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow><mi>n</mi></munderover><mi>i</mi>")
                .linear_text(),
            "∑_(i=1)^n i"
        );
        assert_eq!(omml("<msup><mi>x</mi><mn>2</mn></msup>").linear_text(), "x^2");
        assert_eq!(omml("<mroot><mi>x</mi><mn>3</mn></mroot>").linear_text(), "∛x");
    }
}
