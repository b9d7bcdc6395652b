//! Navigation document format
//!
//! The book's table of contents is a `nav` page holding a two-level ordered
//! list: one `li` per part, each with an `a` naming the part and a nested
//! `ol` of chapter links.
//!
//! ```text
//! <nav><ol>
//!   <li><a href="...">Welcome to Swift</a>
//!     <ol><li><a href="GuidedTour/AboutSwift.xhtml">About Swift</a></li></ol>
//!   </li>
//! </ol></nav>
//! ```
//!
//! The parsed sections render as the catalog's landing page.

use crate::common::links::DOC_SCHEME;
use crate::error::{ConvertError, Result};
use crate::html::{Element, HtmlDocument};
use crate::ir::nodes::{
    DocNode, Document, Heading, InlineContent, Link, List, ListItem, Paragraph,
};
use serde::Serialize;

/// One chapter entry of a navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: String,
    pub target_id: String,
}

/// A top-level part of the book with its chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub name: String,
    pub items: Vec<NavItem>,
}

/// Parses the navigation page into its sections.
pub fn parse_sections(source: &str) -> Result<Vec<NavSection>> {
    let document = HtmlDocument::parse(source);
    let list = document
        .select_first("nav ol")?
        .ok_or_else(|| ConvertError::MissingElement("nav ol".to_string()))?;

    list.children_named("li")
        .iter()
        .map(|entry| {
            let name = entry
                .children_named("a")
                .first()
                .ok_or_else(|| ConvertError::MissingElement("nav section <a>".to_string()))?
                .text();

            let items = entry
                .children_named("ol")
                .iter()
                .flat_map(|chapters| chapters.children_named("li"))
                .flat_map(|chapter| chapter.children_named("a"))
                .map(|link| NavItem {
                    name: link.own_text(),
                    target_id: target_id(&link.attr("href").unwrap_or_default()),
                })
                .collect();

            Ok(NavSection { name, items })
        })
        .collect()
}

/// Chapter id from an href: the part after the last `/`, up to the last `.`.
fn target_id(href: &str) -> String {
    let file = href.rsplit_once('/').map_or(href, |(_, file)| file);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    stem.to_string()
}

/// Renders the navigation sections as the catalog's landing page.
pub fn nav_document(sections: &[NavSection], module_name: &str) -> Document {
    let mut children = vec![
        DocNode::Heading(Heading {
            level: 1,
            content: vec![InlineContent::SymbolLink(module_name.to_string())],
        }),
        DocNode::Heading(Heading {
            level: 2,
            content: vec![InlineContent::text("Topics")],
        }),
    ];

    for section in sections {
        children.push(DocNode::Heading(Heading {
            level: 3,
            content: vec![InlineContent::text(section.name.clone())],
        }));

        let items = section
            .items
            .iter()
            .map(|item| ListItem {
                children: vec![DocNode::Paragraph(Paragraph::new(vec![
                    InlineContent::Link(Link {
                        destination: format!("{DOC_SCHEME}{}", item.target_id),
                        content: vec![InlineContent::text(item.name.clone())],
                    }),
                ]))],
            })
            .collect();
        children.push(DocNode::List(List {
            ordered: false,
            items,
        }));
    }

    Document::new(children)
}
