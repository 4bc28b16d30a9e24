use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which elements the toggle binds to and which names it writes.
///
/// Missing fields in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Selector for the element that receives clicks.
    pub trigger_selector: String,
    /// Selector for the element whose class is toggled.
    pub target_selector: String,
    /// Class marking the target as open.
    pub active_class: String,
    /// Attribute on the trigger mirroring the open state.
    pub expanded_attribute: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            trigger_selector: ".nav-toggle".to_string(),
            target_selector: ".nav-menu".to_string(),
            active_class: "active".to_string(),
            expanded_attribute: "aria-expanded".to_string(),
        }
    }
}

impl ToggleConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}
