use std::collections::BTreeMap;

use crate::class_list::ClassList;

/// Builder for a subtree of nodes.
///
/// Elements are plain values; `Document::new` moves them into an arena and
/// hands out `NodeId` handles from then on.
#[derive(Debug, Clone, Default)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Presentation and accessibility state
    pub classes: ClassList,
    pub attributes: BTreeMap<String, String>,

    // Content
    pub text: Option<String>,
    pub children: Vec<Element>,

    // Interaction
    pub clickable: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// A clickable `button` element.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label).clickable(true)
    }

    /// A clickable `a` element.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new("a")
            .text(label)
            .attribute("href", href)
            .clickable(true)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.add(name);
        self
    }

    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.classes.add(name);
        }
        self
    }

    // Attributes
    /// Set an attribute. `class` and `id` go to their dedicated fields so
    /// selectors see them.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "class" => {
                for class in ClassList::parse(&value).iter() {
                    self.classes.add(class);
                }
            }
            "id" => self.id = Some(value),
            _ => {
                self.attributes.insert(name, value);
            }
        }
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }
}
