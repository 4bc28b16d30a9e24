use crate::document::{Document, NodeId};
use crate::layout::LayoutResult;

/// Find the deepest clickable node at the given coordinates.
/// Returns None if no clickable node contains the point.
pub fn hit_test(layout: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<NodeId> {
    hit_test_node(layout, doc, doc.root(), x, y, true)
}

/// Find any node (clickable or not) at the given coordinates.
/// Returns the deepest node containing the point.
pub fn hit_test_any(layout: &LayoutResult, doc: &Document, x: u16, y: u16) -> Option<NodeId> {
    hit_test_node(layout, doc, doc.root(), x, y, false)
}

fn hit_test_node(
    layout: &LayoutResult,
    doc: &Document,
    id: NodeId,
    x: u16,
    y: u16,
    clickable_only: bool,
) -> Option<NodeId> {
    let rect = layout.get(&id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last laid out = on top)
    for &child in doc[id].children().iter().rev() {
        if let Some(found) = hit_test_node(layout, doc, child, x, y, clickable_only) {
            return Some(found);
        }
    }

    if !clickable_only || doc[id].is_clickable() {
        Some(id)
    } else {
        None
    }
}
