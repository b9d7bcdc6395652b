//! Core data structures for the markup tree.
//!
//! Block and inline content live in two separate enums, so an inline node can
//! never hold a block child.

use serde::Serialize;

/// Block-level markup node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocNode {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    Table(Table),
    BlockQuote(BlockQuote),
    CodeBlock(CodeBlock),
    /// Raw markup passed through untouched.
    HtmlBlock(HtmlBlock),
}

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub children: Vec<DocNode>,
}

/// Represents a heading with a specific level (1-6).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<InlineContent>,
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub content: Vec<InlineContent>,
}

/// Represents a list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub children: Vec<DocNode>,
}

/// Represents a table: one header row plus body rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub header: Vec<TableCell>,
    pub rows: Vec<TableRow>,
}

/// Represents a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// Represents a table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub content: Vec<InlineContent>,
}

/// Represents a quoted block, used for admonitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuote {
    pub children: Vec<DocNode>,
}

/// Represents a fenced code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlBlock {
    pub literal: String,
}

/// Represents inline content, such as text, emphasis, links, etc.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineContent {
    Text(String),
    Emphasis(Vec<InlineContent>),
    Strong(Vec<InlineContent>),
    /// Literal code, never re-parsed as markup.
    Code(String),
    /// Raw markup passed through untouched.
    Html(String),
    Link(Link),
    Image(Image),
    /// Reference to a documentation symbol, e.g. the module a catalog belongs to.
    SymbolLink(String),
}

/// Represents a hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub destination: String,
    pub content: Vec<InlineContent>,
}

/// Represents an image by its logical asset name.
///
/// `source` is `None` when the element's path could not be interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub source: Option<String>,
}

impl Document {
    pub fn new(children: Vec<DocNode>) -> Self {
        Self { children }
    }
}

impl Paragraph {
    pub fn new(content: Vec<InlineContent>) -> Self {
        Self { content }
    }
}

impl DocNode {
    /// Inline content of blocks that directly hold it (paragraphs and headings).
    pub fn inline_content_mut(&mut self) -> Option<&mut Vec<InlineContent>> {
        match self {
            DocNode::Paragraph(p) => Some(&mut p.content),
            DocNode::Heading(h) => Some(&mut h.content),
            _ => None,
        }
    }
}

impl InlineContent {
    pub fn text(text: impl Into<String>) -> Self {
        InlineContent::Text(text.into())
    }
}
