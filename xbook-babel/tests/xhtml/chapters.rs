use crate::common::sample_chapters;
use xbook_babel::convert_chapters;
use xbook_babel::ir::nodes::{DocNode, Image, InlineContent, Link};

fn links(content: &[InlineContent]) -> Vec<&Link> {
    content
        .iter()
        .filter_map(|inline| match inline {
            InlineContent::Link(link) => Some(link),
            _ => None,
        })
        .collect()
}

#[test]
fn cross_chapter_links_use_catalog_references() {
    let docs = convert_chapters(&sample_chapters()).unwrap();
    let about = &docs[0].1;

    let DocNode::Paragraph(intro) = &about.children[1] else {
        panic!("expected paragraph, got {:?}", about.children[1]);
    };
    let destinations: Vec<&str> = links(&intro.content)
        .iter()
        .map(|link| link.destination.as_str())
        .collect();
    assert_eq!(
        destinations,
        vec!["doc:TheBasics#Constants-and-Variables", "doc:TheBasics"]
    );
}

#[test]
fn standalone_image_becomes_paragraph_with_logical_name() {
    let docs = convert_chapters(&sample_chapters()).unwrap();
    assert_eq!(
        docs[0].1.children[2],
        DocNode::Paragraph(xbook_babel::ir::nodes::Paragraph::new(vec![
            InlineContent::Image(Image {
                source: Some("closure_syntax".to_string())
            })
        ]))
    );
}

#[test]
fn admonition_becomes_prefixed_block_quote() {
    let docs = convert_chapters(&sample_chapters()).unwrap();
    let DocNode::BlockQuote(quote) = &docs[0].1.children[3] else {
        panic!("expected block quote");
    };
    let DocNode::Paragraph(first) = &quote.children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(first.content[0], InlineContent::text("Note: Swift is "));
    assert_eq!(
        first.content[1],
        InlineContent::Emphasis(vec![InlineContent::text("friendly")])
    );
}

#[test]
fn sections_flatten_into_one_block_sequence() {
    let docs = convert_chapters(&sample_chapters()).unwrap();
    let basics = &docs[1].1;

    let headings: Vec<u8> = basics
        .children
        .iter()
        .filter_map(|block| match block {
            DocNode::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![2, 3, 3]);

    let listing = basics
        .children
        .iter()
        .find_map(|block| match block {
            DocNode::CodeBlock(code) => Some(code),
            _ => None,
        })
        .expect("code listing");
    assert_eq!(listing.language.as_deref(), Some("swift"));
    assert_eq!(
        listing.literal,
        "let maximumNumberOfLoginAttempts = 10\nvar currentLoginAttempt = 0\n"
    );
}
