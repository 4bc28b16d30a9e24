//! Error types

use navdom::SelectorError;

/// Which side of the toggle an element plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Trigger,
    Target,
}

impl std::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementRole::Trigger => write!(f, "trigger"),
            ElementRole::Target => write!(f, "target"),
        }
    }
}

/// Failure to set up a toggle. Nothing is registered when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// The selector matched no element in the document.
    #[error("no {role} element matches '{selector}'")]
    MissingElement {
        role: ElementRole,
        selector: String,
    },

    /// The configured selector could not be parsed.
    #[error("invalid {role} selector '{selector}': {source}")]
    InvalidSelector {
        role: ElementRole,
        selector: String,
        #[source]
        source: SelectorError,
    },
}

impl ToggleError {
    pub fn role(&self) -> ElementRole {
        match self {
            ToggleError::MissingElement { role, .. } | ToggleError::InvalidSelector { role, .. } => {
                *role
            }
        }
    }
}

/// Failure to load a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
