use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use crate::class_list::ClassList;
use crate::element::Element;
use crate::selector::{Selector, SelectorError};

/// Handle to a node in a [`Document`].
///
/// Handles are plain indices. They do not keep the node alive and are only
/// meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node stored in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    tag: String,
    id: Option<String>,
    classes: ClassList,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    clickable: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute, returning the previous value.
    ///
    /// Classes are not attributes here; change them through
    /// [`classes_mut`](Self::classes_mut).
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of nodes forming a single tree.
///
/// Nodes are never removed, so every `NodeId` handed out by a document stays
/// valid for that document's lifetime.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Build a document from an element tree. The element becomes the root.
    pub fn new(root: Element) -> Self {
        let mut doc = Self { nodes: Vec::new() };
        doc.insert(root, None);
        doc
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let handle = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: element.tag,
            id: element.id,
            classes: element.classes,
            attributes: element.attributes,
            text: element.text,
            clickable: element.clickable,
            parent,
            children: Vec::with_capacity(element.children.len()),
        });

        for child in element.children {
            let child_id = self.insert(child, Some(handle));
            self.nodes[handle.0].children.push(child_id);
        }

        handle
    }

    /// Append an element tree as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        let child = self.insert(element, Some(parent));
        self.nodes[parent.0].children.push(child);
        child
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Iterate over `id` and its ancestors, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| {
            self.get(*current).and_then(Node::parent)
        })
    }

    /// Number of ancestors above `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// All nodes in document (pre-order) order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(node) = self.get(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Find a node by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| self[*n].id() == Some(id))
    }

    /// First node matching `selector` in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.find(&selector))
    }

    /// Every node matching `selector` in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.find_all(&selector))
    }

    pub fn find(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|n| selector.matches(self, *n))
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect()
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    /// Panics if `id` was issued by a different document.
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Document {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
