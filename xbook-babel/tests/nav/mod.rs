//! Navigation page tests against the sample book.

use crate::common::read_fixture;
use insta::assert_snapshot;
use xbook_babel::formats::markdown::serializer::serialize_to_markdown;
use xbook_babel::formats::nav::{nav_document, parse_sections};

#[test]
fn sample_navigation_sections() {
    let sections = parse_sections(&read_fixture("nav.xhtml")).unwrap();
    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Welcome to Swift", "Language Guide"]);
    assert_eq!(sections[0].items[0].name, "About Swift");
    assert_eq!(sections[0].items[0].target_id, "AboutSwift");
    assert_eq!(sections[1].items[0].target_id, "TheBasics");
}

#[test]
fn landing_page_markdown() {
    let sections = parse_sections(&read_fixture("nav.xhtml")).unwrap();
    let markdown = serialize_to_markdown(&nav_document(&sections, "Swift")).unwrap();
    assert_snapshot!(markdown.trim_end(), @r###"
# ``Swift``

## Topics

### Welcome to Swift

- [About Swift](doc:AboutSwift)

### Language Guide

- [The Basics](doc:TheBasics)
"###);
}

#[test]
fn module_name_titles_the_page() {
    let sections = parse_sections(&read_fixture("nav.xhtml")).unwrap();
    let markdown = serialize_to_markdown(&nav_document(&sections, "Concurrency")).unwrap();
    assert!(markdown.starts_with("# ``Concurrency``\n"), "{markdown}");
}
