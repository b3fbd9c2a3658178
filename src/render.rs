//! # render: document subtree to terminal text
//!
//! Walks an owned [`DomNode`] tree in pre-order and writes a linear text
//! stream, which is then passed through [`crate::normalize::normalize`].
//!
//! Per node, before its children are visited:
//! - text nodes write their text with whitespace runs collapsed to one space;
//! - `br` elements write a newline;
//! - `h2` elements write `"\n\n# "` so the heading starts a new paragraph;
//! - then, if the previous sibling is an `h2` element, a newline is written.
//!
//! The whitespace text that usually sits between `</h2>` and the next block
//! thus ends up as a trailing space, which normalization strips.
//!
//! Any other element writes nothing itself but its children are still visited.

use crate::normalize::{collapse_whitespace, normalize};

/// A node of the content subtree handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Element { tag: String, children: Vec<DomNode> },
    Text(String),
}

impl DomNode {
    pub fn element(tag: impl Into<String>, children: Vec<DomNode>) -> Self {
        DomNode::Element {
            tag: tag.into().to_ascii_lowercase(),
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DomNode::Text(text.into())
    }

    fn is_element(&self, name: &str) -> bool {
        matches!(self, DomNode::Element { tag, .. } if tag == name)
    }

    fn children(&self) -> &[DomNode] {
        match self {
            DomNode::Element { children, .. } => children,
            DomNode::Text(_) => &[],
        }
    }
}

const LINE_BREAK_TAG: &str = "br";
const HEADING_TAG: &str = "h2";

/// Render the given sibling roots to normalized text. No roots yields `""`.
pub fn render(roots: &[DomNode]) -> String {
    normalize(&render_raw(roots))
}

/// The raw text stream before normalization.
pub fn render_raw(roots: &[DomNode]) -> String {
    let mut buf = String::new();
    // (node, previous sibling); children are pushed in reverse so they pop in document order.
    let mut stack: Vec<(&DomNode, Option<&DomNode>)> = Vec::new();
    push_siblings(&mut stack, roots);

    while let Some((node, previous)) = stack.pop() {
        match node {
            DomNode::Text(text) => buf.push_str(&collapse_whitespace(text)),
            DomNode::Element { tag, .. } if tag == LINE_BREAK_TAG => buf.push('\n'),
            DomNode::Element { tag, .. } if tag == HEADING_TAG => buf.push_str("\n\n# "),
            DomNode::Element { .. } => {}
        }
        if previous.is_some_and(|p| p.is_element(HEADING_TAG)) {
            buf.push('\n');
        }
        push_siblings(&mut stack, node.children());
    }

    buf
}

fn push_siblings<'a>(stack: &mut Vec<(&'a DomNode, Option<&'a DomNode>)>, siblings: &'a [DomNode]) {
    for (index, node) in siblings.iter().enumerate().rev() {
        let previous = index.checked_sub(1).map(|i| &siblings[i]);
        stack.push((node, previous));
    }
}
