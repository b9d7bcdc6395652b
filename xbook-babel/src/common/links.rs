//! Link and image source resolution.
//!
//! Intra-book links are rewritten into the documentation catalog's reference
//! scheme:
//!
//! - `doc:<id>` for a whole chapter
//! - `doc:<id>#<slug>` when the fragment names a known section
//!
//! `<id>` is the target file name without directory or extension, or `/` for
//! the book root (an empty path, as in `#section`). External links (anything
//! with a host) are kept verbatim.

use super::anchors::AnchorMap;
use super::assets::asset_name;
use percent_encoding::percent_decode_str;
use std::path::Path;
use std::sync::OnceLock;
use url::Url;

/// Document id used for links that stay in the current document.
pub const ROOT_DOCUMENT: &str = "/";

/// Scheme prefix of catalog references.
pub const DOC_SCHEME: &str = "doc:";

/// Resolves a relative reference against a placeholder base. Only the last
/// path segment and the fragment of the result are used.
fn join_relative(reference: &str) -> Option<Url> {
    static BASE: OnceLock<Option<Url>> = OnceLock::new();
    BASE.get_or_init(|| Url::parse("https://book.invalid/").ok())
        .as_ref()?
        .join(reference)
        .ok()
}

/// Computes the destination for an `<a href>`.
pub fn resolve_link_destination(href: &str, anchors: &AnchorMap) -> String {
    if is_external(href) {
        return href.to_string();
    }

    let Some(url) = join_relative(href) else {
        log::trace!("unparsable link '{href}', keeping it verbatim");
        return href.to_string();
    };

    let id = document_id(&url);
    match url.fragment().and_then(|fragment| anchors.get(fragment)) {
        Some(slug) => format!("{DOC_SCHEME}{id}#{slug}"),
        None => {
            if let Some(fragment) = url.fragment() {
                log::trace!("fragment '#{fragment}' in '{href}' has no known section");
            }
            format!("{DOC_SCHEME}{id}")
        }
    }
}

/// Logical asset name for an `<img src>`, or `None` when the source cannot be
/// interpreted as a path.
pub fn resolve_image_source(src: &str) -> Option<String> {
    if src.trim().is_empty() {
        return None;
    }
    let url = join_relative(src)?;
    let stem = file_stem(&last_segment(&url))?;
    Some(asset_name(&stem).name)
}

fn is_external(href: &str) -> bool {
    Url::parse(href).is_ok_and(|url| url.host().is_some())
}

/// Final path segment without extension; `/` for an empty or `.` segment.
fn document_id(url: &Url) -> String {
    match file_stem(&last_segment(url)) {
        Some(stem) if stem != "." => stem,
        _ => ROOT_DOCUMENT.to_string(),
    }
}

/// Last non-empty path segment, percent-decoded, so `a/b/` yields `b` and
/// `caf%C3%A9.png` yields `café.png`.
fn last_segment(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("");
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn file_stem(segment: &str) -> Option<String> {
    Path::new(segment)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
