//! Emission tree and the flattening pass that turns it into indented text.
//!
//! Lowering never tracks indentation. Depth is inferred while flattening: a
//! group whose first child is a line opens a block one level deeper, a group
//! whose first child is another group is an inline wrapper and stays at the
//! current depth.

const INDENT: &str = "  ";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Emission {
    Line(String),
    Group(Vec<Emission>),
}

impl Emission {
    pub fn line(text: impl Into<String>) -> Self {
        Emission::Line(text.into())
    }

    fn opens_block(children: &[Emission]) -> bool {
        matches!(children.first(), Some(Emission::Line(_)))
    }

    /// Concatenates expression fragments onto one logical line.
    ///
    /// Multi-line fragments (function literals) are spliced: the text before
    /// them is prefixed onto their first line and the text after them is
    /// appended to their last line. Their inner structure is left untouched so
    /// flattening still sees the same blocks.
    pub fn splice(parts: impl IntoIterator<Item = Emission>) -> Emission {
        let mut items: Vec<Emission> = Vec::new();
        for part in parts {
            match part {
                Emission::Line(text) => push_text(&mut items, &text),
                Emission::Group(children) if children.is_empty() => {}
                Emission::Group(children) => {
                    debug_assert!(
                        Emission::opens_block(&children)
                            && matches!(children.last(), Some(Emission::Line(_))),
                        "inline group must start and end with a line"
                    );
                    let mut children = children.into_iter();
                    if let Some(Emission::Line(head)) = children.next() {
                        push_text(&mut items, &head);
                    }
                    items.extend(children);
                }
            }
        }
        if items.len() == 1 && matches!(items[0], Emission::Line(_)) {
            items.remove(0)
        } else {
            Emission::Group(items)
        }
    }
}

fn push_text(items: &mut Vec<Emission>, text: &str) {
    match items.last_mut() {
        Some(Emission::Line(last)) => last.push_str(text),
        _ => items.push(Emission::line(text)),
    }
}

/// Flattens a sequence of emissions at the given indentation prefix.
pub fn flatten(nodes: &[Emission], indent: &str) -> String {
    let mut lines = Vec::new();
    flatten_into(nodes, indent, &mut lines);
    lines.join("\n")
}

fn flatten_into(nodes: &[Emission], indent: &str, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            Emission::Line(text) => lines.push(format!("{indent}{text}")),
            Emission::Group(children) if children.is_empty() => {}
            Emission::Group(children) => {
                if Emission::opens_block(children) {
                    let deeper = format!("{indent}{INDENT}");
                    flatten_into(children, &deeper, lines);
                } else {
                    flatten_into(children, indent, lines);
                }
            }
        }
    }
}
