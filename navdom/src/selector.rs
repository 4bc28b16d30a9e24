//! CSS-style selectors.
//!
//! Supported grammar is the subset the document needs:
//! compound selectors made of an optional tag (or `*`), any number of
//! `#id` and `.class` parts, joined by whitespace (descendant combinator).

use crate::document::{Document, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("expected a name after position {position}")]
    MissingName { position: usize },
}

/// One compound selector, e.g. `button.nav-toggle#menu`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(node) = doc.get(node) else {
            return false;
        };

        if let Some(tag) = &self.tag {
            if !node.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(id) = &self.id {
            if node.id() != Some(id.as_str()) {
                return false;
            }
        }

        self.classes.iter().all(|c| node.classes().contains(c))
    }
}

/// A parsed selector: compounds from outermost to innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut compounds = Vec::new();
        let mut chars = input.char_indices().peekable();

        loop {
            while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
            if chars.peek().is_none() {
                break;
            }

            let mut compound = Compound::default();

            if chars.next_if(|(_, c)| *c == '*').is_none() {
                let tag = take_name(&mut chars);
                if !tag.is_empty() {
                    compound.tag = Some(tag.to_ascii_lowercase());
                }
            }

            while let Some(&(position, ch)) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                match ch {
                    '#' | '.' => {
                        chars.next();
                        let name = take_name(&mut chars);
                        if name.is_empty() {
                            return Err(SelectorError::MissingName { position });
                        }
                        if ch == '#' {
                            // A node has one id, so `#a#b` could never match
                            if compound.id.is_some() {
                                return Err(SelectorError::UnexpectedChar { ch, position });
                            }
                            compound.id = Some(name);
                        } else {
                            compound.classes.push(name);
                        }
                    }
                    _ => return Err(SelectorError::UnexpectedChar { ch, position }),
                }
            }

            compounds.push(compound);
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }

        Ok(Self { compounds })
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Whether `node` is matched by this selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, outer)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(doc, node) {
            return false;
        }

        // Greedy right-to-left walk is exact for descendant-only chains.
        let mut ancestors = doc.ancestors(node).skip(1);
        outer
            .iter()
            .rev()
            .all(|compound| ancestors.any(|a| compound.matches(doc, a)))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_name(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some((_, c)) = chars.next_if(|(_, c)| is_name_char(*c)) {
        name.push(c);
    }
    name
}
