//! Section anchor collection for one chapter.

use crate::common::{url_readable_fragment, AnchorMap};
use crate::error::Result;
use crate::html::Element;

/// Collects `id → slug` for every addressable section below `body`.
///
/// A section is addressable when it carries the `section` class and an `id`,
/// and its first child element is an `h2` or `h3`. The slug is made from the
/// heading's own text, so nested markup such as permalink markers is ignored.
/// Anything else is skipped silently.
pub fn collect_anchors<E: Element>(body: &E) -> Result<AnchorMap> {
    let mut anchors = AnchorMap::new();

    for section in body.select(".section")? {
        let Some(id) = section.attr("id") else {
            continue;
        };
        let Some(heading) = section.first_child_element() else {
            continue;
        };
        if !matches!(heading.tag_name(), "h2" | "h3") {
            continue;
        }

        let slug = url_readable_fragment(&heading.own_text());
        if !anchors.insert(id.clone(), slug) {
            log::debug!("section id '{id}' repeated within one chapter, keeping the first");
        }
    }

    Ok(anchors)
}
