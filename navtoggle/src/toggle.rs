use navdom::{Document, Event, EventKind, Listener, Listeners, MouseButton, NodeId, Selector};

use crate::config::ToggleConfig;
use crate::disclosure::Disclosure;
use crate::error::{ElementRole, ToggleError};

/// Handles of the two elements a toggle was bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installed {
    pub trigger: NodeId,
    pub target: NodeId,
}

/// Click handler keeping a target's active class and a trigger's
/// expanded attribute in step.
///
/// Holds non-owning handles into the document it was resolved against.
/// Passing a different document to its methods panics on the first lookup.
#[derive(Debug, Clone)]
pub struct DisclosureToggle {
    trigger: NodeId,
    target: NodeId,
    active_class: String,
    expanded_attribute: String,
}

impl DisclosureToggle {
    pub fn new(
        trigger: NodeId,
        target: NodeId,
        active_class: impl Into<String>,
        expanded_attribute: impl Into<String>,
    ) -> Self {
        Self {
            trigger,
            target,
            active_class: active_class.into(),
            expanded_attribute: expanded_attribute.into(),
        }
    }

    /// Look up both elements named by `config`.
    pub fn resolve(doc: &Document, config: &ToggleConfig) -> Result<Self, ToggleError> {
        let trigger = find(doc, ElementRole::Trigger, &config.trigger_selector)?;
        let target = find(doc, ElementRole::Target, &config.target_selector)?;
        Ok(Self::new(
            trigger,
            target,
            &config.active_class,
            &config.expanded_attribute,
        ))
    }

    /// Resolve the elements and register the toggle as the trigger's click
    /// listener. On error nothing is registered.
    pub fn install(
        listeners: &mut Listeners,
        doc: &Document,
        config: &ToggleConfig,
    ) -> Result<Installed, ToggleError> {
        let toggle = Self::resolve(doc, config)?;
        let installed = Installed {
            trigger: toggle.trigger,
            target: toggle.target,
        };
        listeners.add_event_listener(toggle.trigger, EventKind::Click, toggle);
        log::info!(
            "disclosure toggle installed: trigger '{}' {} -> target '{}' {}",
            config.trigger_selector,
            installed.trigger,
            config.target_selector,
            installed.target,
        );
        Ok(installed)
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Handle one activation and return the state written to the trigger.
    ///
    /// The class is flipped from the class list itself, not from the
    /// attribute. A document whose attribute and class disagree beforehand
    /// still disagrees afterwards, with the attribute inverted from what it
    /// was.
    pub fn activate(&self, doc: &mut Document) -> Disclosure {
        let expanded =
            Disclosure::from_attribute(doc[self.trigger].attribute(&self.expanded_attribute));

        let active = doc[self.target].classes_mut().toggle(&self.active_class);

        let written = expanded.toggled();
        doc[self.trigger].set_attribute(self.expanded_attribute.as_str(), written.as_attribute());

        log::debug!(
            "disclosure {expanded} -> {written} ({}={active})",
            self.active_class
        );
        if Disclosure::from(active) != written {
            log::warn!(
                "{} on {} disagrees with class '{}' on {}",
                self.expanded_attribute,
                self.trigger,
                self.active_class,
                self.target
            );
        }

        written
    }

    /// State as currently recorded on the trigger.
    pub fn state(&self, doc: &Document) -> Disclosure {
        Disclosure::from_attribute(doc[self.trigger].attribute(&self.expanded_attribute))
    }

    /// Whether the target currently carries the active class.
    pub fn is_active(&self, doc: &Document) -> bool {
        doc[self.target].classes().contains(&self.active_class)
    }

    /// Whether the attribute and the class describe the same state.
    pub fn is_consistent(&self, doc: &Document) -> bool {
        self.state(doc).is_open() == self.is_active(doc)
    }
}

impl Listener for DisclosureToggle {
    /// Only a primary-button click activates the toggle.
    fn handle(&mut self, doc: &mut Document, event: &Event) {
        if !matches!(
            event,
            Event::Click {
                button: MouseButton::Left,
                ..
            }
        ) {
            log::trace!("ignoring {:?} on {}", event, self.trigger);
            return;
        }
        self.activate(doc);
    }
}

fn find(doc: &Document, role: ElementRole, selector: &str) -> Result<NodeId, ToggleError> {
    let parsed = Selector::parse(selector).map_err(|source| ToggleError::InvalidSelector {
        role,
        selector: selector.to_string(),
        source,
    })?;

    doc.find(&parsed).ok_or_else(|| {
        log::warn!("no {role} element matches '{selector}'");
        ToggleError::MissingElement {
            role,
            selector: selector.to_string(),
        }
    })
}
