//! Package document (`content.opf`) reader
//!
//! Only the reading order matters here: the `manifest` maps item ids to
//! chapter paths and the `spine` lists item ids in order.

use crate::error::{ConvertError, Result};
use roxmltree::Node;
use std::collections::HashMap;

/// Chapter paths, relative to the package document, in spine order.
///
/// Manifest items without an `id` or `href` and spine entries that reference
/// no manifest item are skipped.
pub fn parse_spine(source: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| ConvertError::Manifest(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    let manifest = child_named(root, "manifest")
        .ok_or_else(|| ConvertError::Manifest("no <manifest> in package".to_string()))?;
    let spine = child_named(root, "spine")
        .ok_or_else(|| ConvertError::Manifest("no <spine> in package".to_string()))?;

    let hrefs: HashMap<&str, &str> = manifest
        .children()
        .filter(|n| n.tag_name().name() == "item")
        .filter_map(|item| Some((item.attribute("id")?, item.attribute("href")?)))
        .collect();

    let chapters = spine
        .children()
        .filter(|n| n.tag_name().name() == "itemref")
        .filter_map(|itemref| {
            let idref = itemref.attribute("idref")?;
            let href = hrefs.get(idref);
            if href.is_none() {
                log::debug!("spine entry '{idref}' has no manifest item");
            }
            href.map(|href| href.to_string())
        })
        .collect();

    Ok(chapters)
}

fn child_named<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}
