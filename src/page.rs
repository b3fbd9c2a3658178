//! # page: compendium HTML to [`MonsterRecord`]
//!
//! Parses a full compendium page and runs the three traversal callbacks the
//! record is built from:
//!
//! - `.page-title` sets the name,
//! - `#pagecontent` is converted to a [`DomNode`] tree and rendered into the
//!   description,
//! - every `.attrListItem` contributes one `(attrName, attrValue)` pair.
//!
//! Matches are visited in document order, so a repeated match overwrites the
//! value set by an earlier one.

use crate::record::MonsterRecord;
use crate::render::{render, DomNode};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;
use tracing::{debug, info};

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".page-title").unwrap());
static CONTENT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#pagecontent").unwrap());
static ATTR_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".attrListItem").unwrap());
static ATTR_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".attrName").unwrap());
static ATTR_VALUE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".attrValue").unwrap());

/// Build a record from the HTML source of a compendium page.
pub fn extract_record(html: &str) -> MonsterRecord {
    let document = Html::parse_document(html);
    let mut record = MonsterRecord::default();

    for title in document.select(&TITLE) {
        record.name = element_text(title).trim().to_string();
    }

    for content in document.select(&CONTENT) {
        record.description = render(&[to_dom_node(content)]);
    }

    let mut items = 0usize;
    for item in document.select(&ATTR_ITEM) {
        let (label, value) = attribute_pair(item);
        record.apply_attribute(&label, &value);
        items += 1;
    }

    info!(
        name = %record.name,
        description_len = record.description.len(),
        attribute_items = items,
        "Extracted monster record from page"
    );
    record
}

/// Trimmed text of the `.attrName` and `.attrValue` descendants of one item.
pub fn attribute_pair(item: ElementRef<'_>) -> (String, String) {
    let label = descendants_text(item, &ATTR_NAME);
    let value = descendants_text(item, &ATTR_VALUE);
    debug!(label = %label, value = %value, "Attribute item");
    (label, value)
}

fn descendants_text(item: ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector)
        .map(element_text)
        .collect::<String>()
        .trim()
        .to_string()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Copy an element subtree into the renderer's tree type.
///
/// Text and element nodes are kept; comments and other node kinds are dropped.
pub fn to_dom_node(element: ElementRef<'_>) -> DomNode {
    let mut children = Vec::new();
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            children.push(to_dom_node(child_element));
        } else if let Node::Text(text) = child.value() {
            children.push(DomNode::text(&**text));
        }
    }
    DomNode::element(element.value().name(), children)
}
