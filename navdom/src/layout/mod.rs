mod rect;

pub use rect::Rect;

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::document::{Document, NodeId};

pub type LayoutResult = HashMap<NodeId, Rect>;

/// Columns each nesting level is indented by.
pub const INDENT: u16 = 2;

/// A line of text placed by layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub node: NodeId,
    pub x: u16,
    pub y: u16,
    pub text: String,
}

/// Stack the displayed nodes of `doc` top-down within `width` columns.
///
/// A node with text takes one row for it; its children follow underneath,
/// indented one level. Nodes for which `displayed` returns false are left
/// out together with their subtree and get no rect.
pub fn layout<F>(doc: &Document, width: u16, displayed: F) -> LayoutResult
where
    F: Fn(&Document, NodeId) -> bool,
{
    let mut result = LayoutResult::new();
    layout_node(doc, doc.root(), 0, 0, width, &displayed, &mut result);
    result
}

fn layout_node<F>(
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    width: u16,
    displayed: &F,
    result: &mut LayoutResult,
) -> u16
where
    F: Fn(&Document, NodeId) -> bool,
{
    if !displayed(doc, id) {
        return 0;
    }

    let node = &doc[id];
    let available = width.saturating_sub(x);
    let mut used_width = 0;
    let mut height = 0;

    if let Some(text) = node.text() {
        used_width = text_width(text).min(available);
        height = 1;
    }

    let child_x = if id == doc.root() { x } else { x.saturating_add(INDENT) };
    for &child in node.children() {
        let child_height = layout_node(doc, child, child_x, y + height, width, displayed, result);
        if let Some(rect) = result.get(&child) {
            used_width = used_width.max(rect.right().saturating_sub(x));
        }
        height += child_height;
    }

    result.insert(id, Rect::new(x, y, used_width.min(available), height));
    height
}

/// Text rows for every laid out node that carries text, top to bottom.
pub fn text_rows(doc: &Document, layout: &LayoutResult) -> Vec<Row> {
    let mut rows: Vec<Row> = layout
        .iter()
        .filter_map(|(&node, rect)| {
            let text = doc.get(node)?.text()?;
            Some(Row {
                node,
                x: rect.x,
                y: rect.y,
                text: text.to_string(),
            })
        })
        .collect();
    rows.sort_by_key(|row| (row.y, row.x));
    rows
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
