//! XHTML chapter format
//!
//! A chapter is an XHTML page whose `body` holds a `div.body` with the
//! chapter content. Conversion runs in two phases across the whole book:
//!
//! 1. [`anchors::collect_anchors`] records `section id → heading slug` for
//!    every chapter, merged into one book-wide table.
//! 2. [`parser::XhtmlParser`] transcodes each chapter's `div.body`, resolving
//!    intra-book links against that table.
//!
//! Links in chapter N may target sections in chapter N+k, so phase 2 must not
//! start before phase 1 has seen every chapter.

pub mod anchors;
pub mod parser;

use crate::common::AnchorMap;
use crate::error::{ConvertError, Result};
use crate::html::{Element, HtmlDocument, HtmlElement};
use crate::ir::nodes::Document;

pub use anchors::collect_anchors;
pub use parser::XhtmlParser;

/// A parsed chapter page.
pub struct XhtmlChapter {
    document: HtmlDocument,
}

impl XhtmlChapter {
    pub fn parse(source: &str) -> Self {
        Self {
            document: HtmlDocument::parse(source),
        }
    }

    fn body(&self) -> Result<HtmlElement<'_>> {
        self.document
            .body()
            .ok_or_else(|| ConvertError::MissingElement("body".to_string()))
    }

    /// Section anchors defined by this chapter.
    pub fn collect_anchors(&self) -> Result<AnchorMap> {
        collect_anchors(&self.body()?)
    }

    /// Transcodes the chapter's main content against the book-wide anchors.
    pub fn convert(&self, anchors: &AnchorMap) -> Result<Document> {
        let content = self
            .body()?
            .select_first("div.body")?
            .ok_or_else(|| ConvertError::MissingElement("div.body".to_string()))?;

        let children = XhtmlParser::new(anchors).parse_blocks(&content.child_elements())?;
        Ok(Document::new(children))
    }
}
