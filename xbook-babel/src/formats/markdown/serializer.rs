//! Markdown serialization (markup tree → Markdown)
//!
//! Pipeline: Document → Comrak AST → Markdown string. The tree is already
//! nested the way Markdown nests, so the walk is a direct recursive mapping.

use crate::error::{ConvertError, Result};
use crate::ir::nodes::{DocNode, Document, InlineContent, Table};
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeHtmlBlock,
    NodeLink, NodeList, NodeTable, NodeValue, TableAlignment,
};
use comrak::{format_commonmark, Arena, ComrakOptions};
use std::cell::RefCell;

/// Serialize a document to Markdown
pub fn serialize_to_markdown(doc: &Document) -> Result<String> {
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    for block in &doc.children {
        append_block(&arena, root, block);
    }

    let mut output = Vec::new();
    let options = default_comrak_options();
    format_commonmark(root, &options, &mut output)
        .map_err(|e| ConvertError::Serialization(format!("Comrak serialization failed: {e}")))?;

    let markdown = String::from_utf8(output)
        .map_err(|e| ConvertError::Serialization(format!("UTF-8 conversion failed: {e}")))?;

    // Comrak separates adjacent lists with an "end list" comment.
    Ok(markdown.replace("<!-- end list -->\n\n", ""))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    // Raw HTML blocks and inline passthrough must survive as-is.
    options.render.unsafe_ = true;
    options
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn list_attributes(ordered: bool) -> NodeList {
    NodeList {
        list_type: if ordered {
            ListType::Ordered
        } else {
            ListType::Bullet
        },
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}

fn append_block<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, block: &DocNode) {
    match block {
        DocNode::Heading(heading) => {
            let node = new_node(
                arena,
                NodeValue::Heading(NodeHeading {
                    level: heading.level.clamp(1, 6),
                    setext: false,
                }),
            );
            parent.append(node);
            append_inlines(arena, node, &heading.content);
        }

        DocNode::Paragraph(paragraph) => {
            let node = new_node(arena, NodeValue::Paragraph);
            parent.append(node);
            append_inlines(arena, node, &paragraph.content);
        }

        DocNode::List(list) => {
            let node = new_node(arena, NodeValue::List(list_attributes(list.ordered)));
            parent.append(node);
            for item in &list.items {
                let item_node = new_node(arena, NodeValue::Item(list_attributes(list.ordered)));
                node.append(item_node);
                for child in &item.children {
                    append_block(arena, item_node, child);
                }
            }
        }

        DocNode::Table(table) => append_table(arena, parent, table),

        DocNode::BlockQuote(quote) => {
            let node = new_node(arena, NodeValue::BlockQuote);
            parent.append(node);
            for child in &quote.children {
                append_block(arena, node, child);
            }
        }

        DocNode::CodeBlock(code) => {
            parent.append(new_node(
                arena,
                NodeValue::CodeBlock(NodeCodeBlock {
                    fenced: true,
                    fence_char: b'`',
                    fence_length: 3,
                    fence_offset: 0,
                    info: code.language.clone().unwrap_or_default(),
                    literal: code.literal.clone(),
                }),
            ));
        }

        DocNode::HtmlBlock(html) => {
            let mut literal = html.literal.clone();
            if !literal.ends_with('\n') {
                literal.push('\n');
            }
            parent.append(new_node(
                arena,
                NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal,
                }),
            ));
        }
    }
}

/// Tables are GFM pipe tables; the first row is the header. A table without
/// any cells has no pipe-table form and is skipped.
fn append_table<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, table: &Table) {
    let columns = std::iter::once(table.header.len())
        .chain(table.rows.iter().map(|row| row.cells.len()))
        .max()
        .unwrap_or(0);
    if columns == 0 {
        log::debug!("skipping table without cells");
        return;
    }

    let node = new_node(
        arena,
        NodeValue::Table(NodeTable {
            alignments: vec![TableAlignment::None; columns],
            num_columns: columns,
            num_rows: table.rows.len() + 1,
            num_nonempty_cells: 0,
        }),
    );
    parent.append(node);

    let rows = std::iter::once((true, &table.header))
        .chain(table.rows.iter().map(|row| (false, &row.cells)));
    for (is_header, cells) in rows {
        let row_node = new_node(arena, NodeValue::TableRow(is_header));
        node.append(row_node);
        for index in 0..columns {
            let cell_node = new_node(arena, NodeValue::TableCell);
            row_node.append(cell_node);
            if let Some(cell) = cells.get(index) {
                append_inlines(arena, cell_node, &cell.content);
            }
        }
    }
}

fn append_inlines<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    inlines: &[InlineContent],
) {
    for inline in inlines {
        append_inline(arena, parent, inline);
    }
}

fn append_inline<'a>(arena: &'a Arena<AstNode<'a>>, parent: &'a AstNode<'a>, inline: &InlineContent) {
    match inline {
        InlineContent::Text(text) => {
            parent.append(new_node(arena, NodeValue::Text(text.replace('\n', " "))));
        }

        InlineContent::Emphasis(children) => {
            let node = new_node(arena, NodeValue::Emph);
            parent.append(node);
            append_inlines(arena, node, children);
        }

        InlineContent::Strong(children) => {
            let node = new_node(arena, NodeValue::Strong);
            parent.append(node);
            append_inlines(arena, node, children);
        }

        InlineContent::Code(literal) => {
            parent.append(new_node(
                arena,
                NodeValue::Code(NodeCode {
                    num_backticks: 1,
                    literal: literal.clone(),
                }),
            ));
        }

        InlineContent::Html(html) => {
            parent.append(new_node(arena, NodeValue::HtmlInline(html.clone())));
        }

        InlineContent::Link(link) => {
            let node = new_node(
                arena,
                NodeValue::Link(NodeLink {
                    url: link.destination.clone(),
                    title: String::new(),
                }),
            );
            parent.append(node);
            append_inlines(arena, node, &link.content);
        }

        InlineContent::Image(image) => {
            parent.append(new_node(
                arena,
                NodeValue::Image(NodeLink {
                    url: image.source.clone().unwrap_or_default(),
                    title: String::new(),
                }),
            ));
        }

        // Double-backtick symbol references are not CommonMark; emit them raw.
        InlineContent::SymbolLink(symbol) => {
            parent.append(new_node(
                arena,
                NodeValue::HtmlInline(format!("``{symbol}``")),
            ));
        }
    }
}
