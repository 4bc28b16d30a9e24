use navdom::{Document, Element, Selector, SelectorError};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_compound() {
    let selector = Selector::parse("button.nav-toggle.primary#menu").unwrap();
    let compounds = selector.compounds();
    assert_eq!(compounds.len(), 1);
    assert_eq!(compounds[0].tag.as_deref(), Some("button"));
    assert_eq!(compounds[0].id.as_deref(), Some("menu"));
    assert_eq!(compounds[0].classes, vec!["nav-toggle", "primary"]);
}

#[test]
fn test_parse_descendant_chain() {
    let selector: Selector = "  nav   .nav-menu li ".parse().unwrap();
    let compounds = selector.compounds();
    assert_eq!(compounds.len(), 3);
    assert_eq!(compounds[0].tag.as_deref(), Some("nav"));
    assert_eq!(compounds[1].tag, None);
    assert_eq!(compounds[1].classes, vec!["nav-menu"]);
    assert_eq!(compounds[2].tag.as_deref(), Some("li"));
}

#[test]
fn test_parse_universal() {
    let selector = Selector::parse("*").unwrap();
    assert_eq!(selector.compounds()[0].tag, None);
    assert!(selector.compounds()[0].classes.is_empty());
}

#[test]
fn test_parse_errors() {
    assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
    assert_eq!(
        Selector::parse(".nav-toggle > a"),
        Err(SelectorError::UnexpectedChar { ch: '>', position: 12 })
    );
    assert_eq!(
        Selector::parse("nav."),
        Err(SelectorError::MissingName { position: 3 })
    );
    assert_eq!(
        Selector::parse("#"),
        Err(SelectorError::MissingName { position: 0 })
    );    assert_eq!(
        Selector::parse("#a#b"),
        Err(SelectorError::UnexpectedChar { ch: '#', position: 2 })
    );
}

#[test]
fn test_error_display() {
    let err = Selector::parse("a[href]").unwrap_err();
    assert_eq!(err.to_string(), "unexpected character '[' at position 1");
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_matching_is_tag_case_insensitive() {
    let doc = Document::new(Element::new("BUTTON").class("nav-toggle"));
    let selector = Selector::parse("button.nav-toggle").unwrap();
    assert!(selector.matches(&doc, doc.root()));
}

#[test]
fn test_descendant_requires_ancestor() {
    let doc = Document::new(
        Element::new("body")
            .child(Element::new("nav").child(Element::new("ul").class("nav-menu")))
            .child(Element::new("ul").class("nav-menu").id("stray")),
    );
    let matches = doc.query_selector_all("nav .nav-menu").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(doc[matches[0]].id(), None);

    let all = doc.query_selector_all(".nav-menu").unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn test_class_match_requires_all_classes() {
    let doc = Document::new(Element::div().class("nav-menu"));
    assert!(doc.query_selector(".nav-menu").unwrap().is_some());
    assert!(doc.query_selector(".nav-menu.active").unwrap().is_none());
}
