/// Open/closed state carried by the trigger's accessibility attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    /// Read an attribute value. Only the exact string `"true"` is open;
    /// anything else, including a missing attribute, is closed.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("true") => Disclosure::Open,
            _ => Disclosure::Closed,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            Disclosure::Open => "true",
            Disclosure::Closed => "false",
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Open => Disclosure::Closed,
            Disclosure::Closed => Disclosure::Open,
        }
    }
}

impl From<bool> for Disclosure {
    fn from(open: bool) -> Self {
        if open {
            Disclosure::Open
        } else {
            Disclosure::Closed
        }
    }
}

impl std::fmt::Display for Disclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Disclosure::Open => write!(f, "open"),
            Disclosure::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_parsing_is_strict() {
        assert_eq!(Disclosure::from_attribute(Some("true")), Disclosure::Open);
        for value in ["TRUE", "True", "1", "", " true", "yes", "false"] {
            assert_eq!(Disclosure::from_attribute(Some(value)), Disclosure::Closed, "{value:?}");
        }
        assert_eq!(Disclosure::from_attribute(None), Disclosure::Closed);
    }

    #[test]
    fn toggled_alternates() {
        assert_eq!(Disclosure::Closed.toggled(), Disclosure::Open);
        assert_eq!(Disclosure::Open.toggled().toggled(), Disclosure::Open);
        assert_eq!(Disclosure::Open.as_attribute(), "true");
        assert_eq!(Disclosure::Closed.as_attribute(), "false");
    }
}
