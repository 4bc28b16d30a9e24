//! The demo page: header, navigation, article, footer.

use navdom::{Document, Element};

pub fn document() -> Document {
    Document::new(
        Element::new("body")
            .child(
                Element::new("header")
                    .class("site-header")
                    .child(Element::new("h1").text("Field Notes"))
                    .child(Element::new("p").text("A small page with a collapsible menu")),
            )
            .child(
                Element::new("nav")
                    .class("site-nav")
                    .child(
                        Element::button("[=] Menu")
                            .class("nav-toggle")
                            .attribute("aria-controls", "primary-menu"),
                    )
                    .child(
                        Element::new("ul")
                            .id("primary-menu")
                            .class("nav-menu")
                            .children(
                                [("Home", "/"), ("Articles", "/articles"), ("About", "/about")]
                                    .into_iter()
                                    .map(|(label, href)| {
                                        Element::new("li").child(Element::link(label, href))
                                    }),
                            ),
                    ),
            )
            .child(
                Element::new("article")
                    .child(Element::new("h2").text("Welcome"))
                    .child(Element::new("p").text("Click the menu button, or press Enter.")),
            )
            .child(Element::new("footer").text("q to quit")),
    )
}
