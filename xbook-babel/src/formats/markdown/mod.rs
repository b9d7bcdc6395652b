//! Markdown format implementation
//!
//! Serializes the markup tree into CommonMark with the GFM table extension,
//! using documentation-catalog conventions for links and images.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for serialization: the tree is mapped onto a
//! Comrak AST and handed to `format_commonmark`. Escaping, list markers and
//! table layout are left entirely to the library.
//!
//! # Element Mapping Table
//!
//! | Tree Element     | Markdown Equivalent        | Notes                                  |
//! |------------------|----------------------------|----------------------------------------|
//! | Heading          | `#` … `######`             | Level clamped to 1-6                   |
//! | Paragraph        | Paragraph                  | Direct mapping                         |
//! | List             | `-` or `1.`                | Always tight                           |
//! | Table            | GFM pipe table             | First row is the header                |
//! | BlockQuote       | `>`                        | Used for admonitions                   |
//! | CodeBlock        | Fenced code (```` ``` ````)| Language → info string                 |
//! | HtmlBlock        | Raw HTML                   | Emitted verbatim                       |
//! | InlineContent:   |                            |                                        |
//! |   Text           | Plain text                 | Newlines become spaces                 |
//! |   Emphasis       | `*text*`                   |                                        |
//! |   Strong         | `**text**`                 |                                        |
//! |   Code           | `` `code` ``               |                                        |
//! |   Html           | Raw inline HTML            | Emitted verbatim                       |
//! |   Link           | `[label](doc:Id#slug)`     | Destination already resolved           |
//! |   Image          | `![](asset)`               | Empty alt; empty URL for placeholders  |
//! |   SymbolLink     | ``` ``Symbol`` ```         | Catalog symbol reference               |
//!
//! Markdown is an output-only format here.

pub mod serializer;

use crate::error::Result;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with catalog links"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        serializer::serialize_to_markdown(doc)
    }
}
