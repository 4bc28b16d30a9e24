//! Disclosure toggle for a navigation menu.
//!
//! A click on the trigger flips the `active` class on the target and writes
//! the inverted `aria-expanded` value back onto the trigger.

mod config;
mod disclosure;
mod error;
mod toggle;

pub use config::ToggleConfig;
pub use disclosure::Disclosure;
pub use error::{ConfigError, ElementRole, ToggleError};
pub use toggle::{DisclosureToggle, Installed};
