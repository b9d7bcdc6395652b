//! `scraper` backed element tree

use super::{Element, HtmlNode};
use crate::error::{ConvertError, Result};
use scraper::{ElementRef, Html, Node, Selector};

/// A parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse an HTML or XHTML string. The HTML5 algorithm never fails; broken
    /// markup is repaired the way a browser would.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> HtmlElement<'_> {
        HtmlElement {
            inner: self.html.root_element(),
        }
    }

    /// The `<body>` element.
    pub fn body(&self) -> Option<HtmlElement<'_>> {
        self.root().children_named("body").into_iter().next()
    }

    /// Elements in the whole document matching `selector`.
    pub fn select(&self, selector: &str) -> Result<Vec<HtmlElement<'_>>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .map(|inner| HtmlElement { inner })
            .collect())
    }

    pub fn select_first(&self, selector: &str) -> Result<Option<HtmlElement<'_>>> {
        Ok(self.select(selector)?.into_iter().next())
    }
}

/// An element of an [`HtmlDocument`], valid as long as the document is.
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element for HtmlElement<'a> {
    fn tag_name(&self) -> &str {
        self.inner.value().name()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.inner.value().attr(name).map(str::to_string)
    }

    fn children(&self) -> Vec<HtmlNode<Self>> {
        self.inner
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(text) => Some(HtmlNode::Text(text.text.to_string())),
                Node::Element(_) => {
                    ElementRef::wrap(child).map(|inner| HtmlNode::Element(HtmlElement { inner }))
                }
                _ => None,
            })
            .collect()
    }

    fn outer_html(&self) -> String {
        self.inner.html()
    }

    fn inner_html(&self) -> String {
        self.inner.inner_html()
    }

    fn select(&self, selector: &str) -> Result<Vec<Self>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .inner
            .select(&selector)
            .map(|inner| HtmlElement { inner })
            .collect())
    }
}

fn parse_selector(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|e| ConvertError::Selector(format!("'{source}': {e:?}")))
}
