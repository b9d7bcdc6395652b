//! XHTML book to documentation-catalog conversion
//!
//!     This crate converts an unpacked XHTML book (manifest, navigation page, chapter pages and
//!     images) into a documentation catalog: Markdown pages whose intra-book links use the
//!     catalog's `doc:` reference scheme, plus the assets and metadata files the catalog needs.
//!
//!     TLDR: For contributors:
//!         - We never parse HTML or write Markdown ourselves. scraper builds the element tree,
//!           comrak renders Markdown. Our code is the mapping between the two.
//!         - Transcoders only see the `html::Element` trait, so they can be tested against any
//!           tree, and never against a parser's internals.
//!         - Structural surprises are errors, not guesses. Link and image problems degrade
//!           gracefully instead.
//!
//! Architecture
//!
//!     The pipeline is: XHTML → element tree → markup tree (./ir/nodes.rs) → Markdown.
//!     Format-agnostic helpers (slugs, asset names, link resolution, the anchor table) live in
//!     ./common so the format code stays focused on tree walking.
//!
//!     This is a pure lib: it powers xbook-cli but makes no assumptions about a shell. The only
//!     side effects are in ./book.rs, which reads the book and writes the catalog.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── book.rs                 # Whole-book pipeline
//!     ├── html                    # Element trait over a scraper document
//!     ├── formats
//!     │   ├── xhtml               # Anchor collector and block/inline transcoder
//!     │   ├── nav                 # Navigation document → landing page
//!     │   ├── opf                 # Package document spine
//!     │   ├── markdown            # Markup tree → CommonMark (comrak)
//!     │   └── json                # Markup tree → JSON
//!     ├── lib.rs
//!     ├── ir                      # Markup tree
//!     ├── common                  # Slugs, assets, links, anchors
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithm
//!
//!     Conversion is two-phase over the whole book. Phase one collects every chapter's section
//!     anchors (id → heading slug) into one table, first definition wins. Phase two transcodes
//!     each chapter, rewriting `Chapter.xhtml#id` links to `doc:Chapter#Slug`. A link can point
//!     forward into a chapter not yet transcoded, which is why phase two waits for phase one.
//!
//!     Block conversion is a dispatch on tag name. Sections and the content wrapper are
//!     transparent: their children are spliced into the parent. Highlighted listings become
//!     fenced code, admonitions become block quotes with a `Note: ` style prefix, definition
//!     lists become bullet lists with a `term <term>: ` lead. Unknown `div`s are kept as raw HTML;
//!     unknown inline tags are an error.
pub mod book;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod html;
pub mod ir;
pub mod registry;

pub use book::{convert_chapters, BookConverter, BookOptions, BookReport};
pub use error::{ConvertError, Result};
pub use format::Format;
pub use registry::FormatRegistry;

use common::AnchorMap;
use formats::xhtml::XhtmlChapter;
use ir::nodes::Document;

/// Transcodes one chapter against an existing anchor table.
pub fn convert_chapter(source: &str, anchors: &AnchorMap) -> Result<Document> {
    XhtmlChapter::parse(source).convert(anchors)
}

/// Section anchors defined by one chapter.
pub fn chapter_anchors(source: &str) -> Result<AnchorMap> {
    XhtmlChapter::parse(source).collect_anchors()
}
