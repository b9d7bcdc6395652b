use crate::common::sample_chapters;
use xbook_babel::chapter_anchors;
use xbook_babel::common::AnchorMap;

#[test]
fn collects_every_section_of_the_sample_book() {
    let mut anchors = AnchorMap::new();
    for (_, source) in sample_chapters() {
        anchors.merge(chapter_anchors(&source).unwrap());
    }

    let collected: Vec<(&str, &str)> = anchors.iter().collect();
    assert_eq!(
        collected,
        vec![
            ("ID1", "About-Swift"),
            ("ID309", "The-Basics"),
            ("ID310", "Constants-and-Variables"),
            ("ID311", "Type-Annotations"),
        ]
    );
}

#[test]
fn empty_page_has_no_anchors() {
    // The HTML5 parser always synthesizes a body.
    let anchors = chapter_anchors("").unwrap();
    assert!(anchors.is_empty());
}
