/// Ordered set of class names on a node.
///
/// Insertion order is preserved so rendering the list back out is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for name in value.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Flip membership of a class and return whether it is now present.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_duplicates_and_whitespace() {
        let list = ClassList::parse("  nav-menu  active nav-menu ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["nav-menu", "active"]);
        assert_eq!(list.to_string(), "nav-menu active");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut list = ClassList::parse("nav-menu");
        assert!(list.toggle("active"));
        assert!(list.contains("active"));
        assert!(!list.toggle("active"));
        assert!(!list.contains("active"));
        assert_eq!(list.len(), 1);
    }
}
