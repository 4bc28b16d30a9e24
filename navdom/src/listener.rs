//! Event listener registration and dispatch.
//!
//! Listeners live outside the [`Document`] so a handler can take the
//! document mutably while it runs. Dispatch bubbles from the target node up
//! through its ancestors, running each node's listeners in registration
//! order. A listener always runs to completion before the next one starts.

use std::collections::HashMap;

use crate::document::{Document, NodeId};
use crate::event::{Event, EventKind};

/// Something that reacts to events dispatched on a node.
pub trait Listener {
    fn handle(&mut self, doc: &mut Document, event: &Event);
}

impl<F> Listener for F
where
    F: FnMut(&mut Document, &Event),
{
    fn handle(&mut self, doc: &mut Document, event: &Event) {
        (self)(doc, event)
    }
}

/// Registry of listeners keyed by node and event kind.
#[derive(Default)]
pub struct Listeners {
    by_node: HashMap<(NodeId, EventKind), Vec<Box<dyn Listener>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        kind: EventKind,
        listener: impl Listener + 'static,
    ) {
        log::trace!("listener added: {node} {kind:?}");
        self.by_node
            .entry((node, kind))
            .or_default()
            .push(Box::new(listener));
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.by_node.get(&(node, kind)).map_or(0, Vec::len)
    }

    /// Dispatch `event` to its target and the target's ancestors.
    ///
    /// Returns the number of listeners invoked. Events without a target
    /// reach nobody.
    pub fn dispatch(&mut self, doc: &mut Document, event: &Event) -> usize {
        let Some(target) = event.target() else {
            return 0;
        };
        if doc.get(target).is_none() {
            log::warn!("dropping {:?} for unknown node {target}", event.kind());
            return 0;
        }

        let kind = event.kind();
        let path: Vec<NodeId> = doc.ancestors(target).collect();
        let mut invoked = 0;

        for node in path {
            if let Some(listeners) = self.by_node.get_mut(&(node, kind)) {
                for listener in listeners.iter_mut() {
                    listener.handle(doc, event);
                    invoked += 1;
                }
            }
        }

        log::debug!("dispatched {kind:?} on {target} to {invoked} listener(s)");
        invoked
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.by_node.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
