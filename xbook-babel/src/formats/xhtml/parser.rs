//! XHTML chapter body → markup tree
//!
//! Block elements are dispatched on their tag name. Most produce exactly one
//! node; transparent containers (`div.section`, `div.body`) splice their
//! children into the parent sequence instead. Leaf content goes through the
//! inline dispatcher, which is strict: an inline tag it does not know is an
//! error, whereas an unknown block-level `div` is passed through as raw HTML.

use crate::common::{resolve_image_source, resolve_link_destination, AnchorMap};
use crate::error::{ConvertError, Result};
use crate::html::{normalize_whitespace, Element, HtmlNode};
use crate::ir::nodes::{
    BlockQuote, CodeBlock, DocNode, Heading, HtmlBlock, Image, InlineContent, Link, List,
    ListItem, Paragraph, Table, TableCell, TableRow,
};

/// Language tag of the book's highlighted code listings.
const LISTING_LANGUAGE: &str = "swift";

/// Block-level tags with a dedicated conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTag {
    Heading(u8),
    List { ordered: bool },
    Paragraph,
    Table,
    DefinitionList,
    Div,
    /// Anything else is wrapped in a paragraph as inline content.
    Other,
}

impl BlockTag {
    fn of(tag: &str) -> Self {
        match tag {
            "h1" => BlockTag::Heading(1),
            "h2" => BlockTag::Heading(2),
            "h3" => BlockTag::Heading(3),
            "h4" => BlockTag::Heading(4),
            "h5" => BlockTag::Heading(5),
            "h6" => BlockTag::Heading(6),
            "ul" => BlockTag::List { ordered: false },
            "ol" => BlockTag::List { ordered: true },
            "p" => BlockTag::Paragraph,
            "table" => BlockTag::Table,
            "dl" => BlockTag::DefinitionList,
            "div" => BlockTag::Div,
            _ => BlockTag::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineTag {
    Link,
    Image,
    Emphasis,
    Strong,
    Code,
    /// Kept as raw markup.
    Passthrough,
    Unexpected,
}

impl InlineTag {
    fn of(tag: &str) -> Self {
        match tag {
            "a" => InlineTag::Link,
            "img" => InlineTag::Image,
            "em" => InlineTag::Emphasis,
            "strong" => InlineTag::Strong,
            "code" => InlineTag::Code,
            "sup" | "span" => InlineTag::Passthrough,
            _ => InlineTag::Unexpected,
        }
    }
}

/// Converts chapter elements using a finished, book-wide anchor table.
#[derive(Debug, Clone, Copy)]
pub struct XhtmlParser<'a> {
    anchors: &'a AnchorMap,
}

impl<'a> XhtmlParser<'a> {
    pub fn new(anchors: &'a AnchorMap) -> Self {
        Self { anchors }
    }

    /// Converts a sequence of sibling elements, splicing multi-node results.
    pub fn parse_blocks<E: Element>(&self, elements: &[E]) -> Result<Vec<DocNode>> {
        let mut blocks = Vec::new();
        for element in elements {
            blocks.extend(self.parse_block(element)?);
        }
        Ok(blocks)
    }

    /// Converts one block-level element into zero or more block nodes.
    pub fn parse_block<E: Element>(&self, element: &E) -> Result<Vec<DocNode>> {
        let block = match BlockTag::of(element.tag_name()) {
            BlockTag::Heading(level) => DocNode::Heading(Heading {
                level,
                content: self.parse_inline_children(element)?,
            }),
            BlockTag::List { ordered } => self.parse_list(element, ordered)?,
            BlockTag::Paragraph => {
                DocNode::Paragraph(Paragraph::new(self.parse_inline_children(element)?))
            }
            BlockTag::Table => DocNode::Table(self.parse_table(element)?),
            BlockTag::DefinitionList => self.parse_definition_list(element)?,
            BlockTag::Div => return self.parse_div(element),
            BlockTag::Other => DocNode::Paragraph(Paragraph::new(vec![self.parse_inline(element)?])),
        };
        Ok(vec![block])
    }

    fn parse_div<E: Element>(&self, element: &E) -> Result<Vec<DocNode>> {
        if element.has_class("section") || element.has_class("body") {
            return self.parse_blocks(&element.child_elements());
        }
        if element.has_class("highlight-swift") {
            return Ok(vec![parse_code_listing(element)?]);
        }

        let children = element.child_elements();
        match children.split_first() {
            Some((title, rest)) if title.has_class("admonition-title") => {
                Ok(vec![self.parse_admonition(title, rest)?])
            }
            _ => Ok(vec![DocNode::HtmlBlock(HtmlBlock {
                literal: element.inner_html(),
            })]),
        }
    }

    /// Note and warning callouts become a block quote whose text starts with
    /// `"<title>: "`. The prefix is merged into the first text run when the
    /// first block opens with plain text; otherwise it gets its own paragraph.
    fn parse_admonition<E: Element>(&self, title: &E, rest: &[E]) -> Result<DocNode> {
        let prefix = format!("{}: ", title.own_text());
        let mut blocks = self.parse_blocks(rest)?;

        let first_text = blocks
            .first_mut()
            .and_then(DocNode::inline_content_mut)
            .and_then(|content| content.first_mut());
        match first_text {
            Some(InlineContent::Text(text)) => text.insert_str(0, &prefix),
            _ => blocks.insert(
                0,
                DocNode::Paragraph(Paragraph::new(vec![InlineContent::Text(prefix)])),
            ),
        }

        Ok(DocNode::BlockQuote(BlockQuote { children: blocks }))
    }

    fn parse_list<E: Element>(&self, element: &E, ordered: bool) -> Result<DocNode> {
        let items = element
            .child_elements()
            .iter()
            .map(|child| {
                if child.tag_name() != "li" {
                    return Err(ConvertError::unexpected(
                        child.tag_name(),
                        format!("<{}> list", element.tag_name()),
                    ));
                }
                Ok(ListItem {
                    children: self.parse_blocks(&child.child_elements())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DocNode::List(List { ordered, items }))
    }

    /// The header comes from the first row of `thead`, body rows from `tbody`.
    /// Other table children (captions, column groups) are ignored.
    fn parse_table<E: Element>(&self, element: &E) -> Result<Table> {
        let mut table = Table::default();

        for child in element.child_elements() {
            match child.tag_name() {
                "thead" => {
                    if let Some(row) = child.first_child_element() {
                        table.header = self.parse_table_row(&row)?.cells;
                    }
                }
                "tbody" => {
                    for row in child.child_elements() {
                        table.rows.push(self.parse_table_row(&row)?);
                    }
                }
                _ => {}
            }
        }

        Ok(table)
    }

    fn parse_table_row<E: Element>(&self, row: &E) -> Result<TableRow> {
        if row.tag_name() != "tr" {
            return Err(ConvertError::unexpected(row.tag_name(), "table section"));
        }

        let cells = row
            .child_elements()
            .iter()
            .map(|cell| {
                if !matches!(cell.tag_name(), "td" | "th") {
                    return Err(ConvertError::unexpected(cell.tag_name(), "table row"));
                }
                Ok(TableCell {
                    content: self.parse_inline_children(&strip_paragraph(cell))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TableRow { cells })
    }

    /// A `dl` becomes an unordered list with one item per `dt`/`dd` pair.
    ///
    /// Each item opens with the line `term <term>: ` followed by the
    /// description. When the description starts with a paragraph the term line
    /// is merged into it, so the item reads as a single paragraph.
    fn parse_definition_list<E: Element>(&self, element: &E) -> Result<DocNode> {
        let mut items = Vec::new();
        let mut children = element.child_elements().into_iter();

        while let Some(dt) = children.next() {
            if dt.tag_name() != "dt" {
                return Err(ConvertError::unexpected(dt.tag_name(), "definition list"));
            }
            let term = self.parse_inline_children(&strip_paragraph(&dt))?;

            let dd = match children.next() {
                Some(dd) if dd.tag_name() == "dd" => dd,
                Some(other) => {
                    return Err(ConvertError::unexpected(
                        other.tag_name(),
                        format!("definition list after term '{}'", dt.text()),
                    ))
                }
                None => {
                    return Err(ConvertError::MissingElement(format!(
                        "<dd> for term '{}'",
                        dt.text()
                    )))
                }
            };

            let mut term_line = vec![InlineContent::text("term ")];
            term_line.extend(term);
            term_line.push(InlineContent::text(": "));

            let mut description = self.parse_blocks(&dd.child_elements())?;
            match description.first_mut() {
                Some(DocNode::Paragraph(first)) => {
                    term_line.append(&mut first.content);
                    first.content = term_line;
                }
                _ => description.insert(0, DocNode::Paragraph(Paragraph::new(term_line))),
            }

            items.push(ListItem {
                children: description,
            });
        }

        Ok(DocNode::List(List {
            ordered: false,
            items,
        }))
    }

    /// Converts one inline element.
    pub fn parse_inline<E: Element>(&self, element: &E) -> Result<InlineContent> {
        let inline = match InlineTag::of(element.tag_name()) {
            InlineTag::Link => InlineContent::Link(self.parse_link(element)),
            InlineTag::Image => InlineContent::Image(parse_image(element)),
            InlineTag::Emphasis => InlineContent::Emphasis(self.parse_inline_children(element)?),
            InlineTag::Strong => InlineContent::Strong(self.parse_inline_children(element)?),
            InlineTag::Code => InlineContent::Code(element.text()),
            InlineTag::Passthrough => InlineContent::Html(element.outer_html()),
            InlineTag::Unexpected => {
                return Err(ConvertError::unexpected(
                    element.tag_name(),
                    "inline content",
                ))
            }
        };
        Ok(inline)
    }

    /// Converts the children of `element` as inline content. Text runs become
    /// text nodes with their whitespace collapsed.
    pub fn parse_inline_children<E: Element>(&self, element: &E) -> Result<Vec<InlineContent>> {
        element
            .children()
            .into_iter()
            .map(|node| match node {
                HtmlNode::Text(text) => Ok(InlineContent::Text(normalize_whitespace(&text))),
                HtmlNode::Element(child) => self.parse_inline(&child),
            })
            .collect()
    }

    fn parse_link<E: Element>(&self, element: &E) -> Link {
        let href = element.attr("href").unwrap_or_default();
        Link {
            destination: resolve_link_destination(&href, self.anchors),
            content: plain_text_children(element),
        }
    }
}

/// Flattens all descendant text of `element` into text nodes; nested
/// formatting is dropped.
fn plain_text_children<E: Element>(element: &E) -> Vec<InlineContent> {
    let mut content = Vec::new();
    for node in element.children() {
        match node {
            HtmlNode::Text(text) => content.push(InlineContent::Text(normalize_whitespace(&text))),
            HtmlNode::Element(child) => content.extend(plain_text_children(&child)),
        }
    }
    content
}

fn parse_image<E: Element>(element: &E) -> Image {
    let src = element.attr("src").unwrap_or_default();
    Image {
        source: resolve_image_source(&src),
    }
}

/// The listing's lines are the `li` items of its `ol.code-lines`, joined
/// without separator and with whitespace kept exactly.
fn parse_code_listing<E: Element>(element: &E) -> Result<DocNode> {
    let literal = element
        .select("ol.code-lines li")?
        .iter()
        .map(Element::whole_text)
        .collect::<String>();

    Ok(DocNode::CodeBlock(CodeBlock {
        language: Some(LISTING_LANGUAGE.to_string()),
        literal,
    }))
}

/// Unwraps a single child paragraph so cells and terms don't nest one.
fn strip_paragraph<E: Element>(element: &E) -> E {
    let children = element.child_elements();
    match children.as_slice() {
        [only] if only.tag_name() == "p" => only.clone(),
        _ => element.clone(),
    }
}
