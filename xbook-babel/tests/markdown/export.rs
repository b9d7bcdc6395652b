use crate::common::sample_chapters;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use xbook_babel::format::Format;
use xbook_babel::formats::markdown::MarkdownFormat;
use xbook_babel::convert_chapters;

fn rendered_chapters() -> Vec<String> {
    convert_chapters(&sample_chapters())
        .unwrap()
        .iter()
        .map(|(_, doc)| MarkdownFormat.serialize(doc).unwrap())
        .collect()
}

fn parse<'a>(arena: &'a Arena<AstNode<'a>>, markdown: &str) -> &'a AstNode<'a> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    parse_document(arena, markdown, &options)
}

fn count<'a>(node: &'a AstNode<'a>, predicate: &dyn Fn(&NodeValue) -> bool) -> usize {
    let own = usize::from(predicate(&node.data.borrow().value));
    own + node.children().map(|child| count(child, predicate)).sum::<usize>()
}

#[test]
fn about_chapter_links_and_assets() {
    let chapters = rendered_chapters();
    let about = &chapters[0];

    assert!(about.contains("[Constants and Variables](doc:TheBasics#Constants-and-Variables)"));
    assert!(about.contains("[the basics](doc:TheBasics)"));
    assert!(about.contains("![](closure_syntax)"));
    assert!(about.contains("[swift.org](https://www.swift.org)"));
    assert!(about.contains("> Note: Swift is *friendly* to new programmers."));
}

#[test]
fn basics_chapter_structure() {
    let chapters = rendered_chapters();
    let basics = &chapters[1];

    assert!(basics.contains("``` swift\nlet maximumNumberOfLoginAttempts = 10\n"));
    assert!(basics.contains("- term `Int`: A signed integer."));
    assert!(basics.contains("<sup>2</sup>"));
    assert!(basics.contains("[Type Annotations](doc:/#Type-Annotations)"));
    assert!(basics.contains("[the introduction](doc:AboutSwift#About-Swift)"));

    let arena = Arena::new();
    let root = parse(&arena, basics);
    assert_eq!(count(root, &|v| matches!(v, NodeValue::Table(_))), 1);
    assert_eq!(count(root, &|v| matches!(v, NodeValue::CodeBlock(_))), 1);
    assert_eq!(
        count(root, &|v| matches!(v, NodeValue::Heading(h) if h.level == 3)),
        2
    );
}

#[test]
fn rendering_is_stable() {
    assert_eq!(rendered_chapters(), rendered_chapters());
}
