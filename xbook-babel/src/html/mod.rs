//! HTML element tree access
//!
//! The transcoders never touch a parser directly. They walk any tree that
//! implements [`Element`]: tag name, attributes, ordered children (elements and
//! text), text extraction, raw markup and CSS selection.
//!
//! # Library Choice
//!
//! The concrete tree is a `scraper` document (see [`document`]), which parses
//! with html5ever and matches CSS selectors with the `selectors` crate.
//! XHTML chapters are parsed with the HTML5 algorithm, which tolerates the XML
//! prolog and namespace declarations the book template carries. Elements
//! borrow the document they came from, so a document outlives every element
//! handed out from it.

pub mod document;

use crate::error::Result;

pub use document::{HtmlDocument, HtmlElement};

/// A child of an element: either another element or a run of text.
#[derive(Debug, Clone)]
pub enum HtmlNode<E> {
    Element(E),
    Text(String),
}

/// Read-only view of an element in a parsed HTML tree.
pub trait Element: Clone + Sized {
    /// Local tag name, lower-cased by the parser (e.g. `div`, `h2`).
    fn tag_name(&self) -> &str;

    /// Attribute value, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Ordered element and text children. Comments and processing
    /// instructions are skipped.
    fn children(&self) -> Vec<HtmlNode<Self>>;

    /// The element serialized with its own tags.
    fn outer_html(&self) -> String;

    /// The element's children serialized, without its own tags.
    fn inner_html(&self) -> String;

    /// Descendants (never the element itself) matching the CSS `selector`, in
    /// document order.
    fn select(&self, selector: &str) -> Result<Vec<Self>>;

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Element children only, in order.
    fn child_elements(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter_map(|node| match node {
                HtmlNode::Element(element) => Some(element),
                HtmlNode::Text(_) => None,
            })
            .collect()
    }

    /// Direct element children with the given tag name.
    fn children_named(&self, tag: &str) -> Vec<Self> {
        self.child_elements()
            .into_iter()
            .filter(|child| child.tag_name() == tag)
            .collect()
    }

    fn first_child_element(&self) -> Option<Self> {
        self.child_elements().into_iter().next()
    }

    /// Text of the direct text children only, whitespace-normalized and trimmed.
    fn own_text(&self) -> String {
        let mut text = String::new();
        for node in self.children() {
            if let HtmlNode::Text(run) = node {
                text.push_str(&run);
            }
        }
        normalize_whitespace(&text).trim().to_string()
    }

    /// All descendant text, exactly as it appears in the source.
    fn whole_text(&self) -> String {
        let mut text = String::new();
        for node in self.children() {
            match node {
                HtmlNode::Text(run) => text.push_str(&run),
                HtmlNode::Element(element) => text.push_str(&element.whole_text()),
            }
        }
        text
    }

    /// All descendant text, whitespace-normalized and trimmed.
    fn text(&self) -> String {
        normalize_whitespace(&self.whole_text()).trim().to_string()
    }

    /// First descendant matching `selector`.
    fn select_first(&self, selector: &str) -> Result<Option<Self>> {
        Ok(self.select(selector)?.into_iter().next())
    }
}

/// Collapses every run of whitespace into a single space. Leading and
/// trailing whitespace is collapsed but kept.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}
