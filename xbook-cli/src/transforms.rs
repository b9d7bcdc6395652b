//! CLI-specific transforms
//!
//! Each transform is a stage + format combination applied to a single file,
//! for looking at what one chapter or the navigation page turns into without
//! converting a whole book.
//!
//! ## Stages
//!
//! - `ast`: a chapter transcoded to the markup tree. Links resolve against the
//!   chapter's own anchors only, so cross-chapter fragments are dropped.
//! - `anchors`: the section anchors a chapter defines.
//! - `nav`: the sections of a navigation page.
//!
//! Example: `xbook inspect LanguageGuide/TheBasics.xhtml ast-json`

use xbook_babel::formats::nav::{nav_document, parse_sections};
use xbook_babel::{chapter_anchors, convert_chapter, FormatRegistry};

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "ast-json",
    "ast-markdown",
    "anchors-json",
    "nav-json",
    "nav-markdown",
];

/// Transform used when `inspect` is given none.
pub const DEFAULT_TRANSFORM: &str = "ast-markdown";

/// Transform for a chapter tree in the format that claims `filename`'s
/// extension, e.g. `ast-json` for `Chapter.json`.
pub fn transform_for_output(filename: &str, registry: &FormatRegistry) -> Option<String> {
    registry
        .detect_format_from_filename(filename)
        .map(|format| format!("ast-{format}"))
}

/// Execute a named transform on a source file
///
/// `module_name` titles the landing page rendered by `nav-markdown`.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    module_name: &str,
) -> Result<String, String> {
    let registry = FormatRegistry::default();
    let (stage, format) = transform_name
        .split_once('-')
        .ok_or_else(|| format!("Unknown transform: {transform_name}"))?;

    match (stage, format) {
        ("ast", format) if registry.has(format) => {
            let anchors = chapter_anchors(source).map_err(|e| format!("Transform failed: {e}"))?;
            let doc =
                convert_chapter(source, &anchors).map_err(|e| format!("Transform failed: {e}"))?;
            registry
                .serialize(&doc, format)
                .map_err(|e| format!("Serialization failed: {e}"))
        }
        ("anchors", "json") => {
            let anchors = chapter_anchors(source).map_err(|e| format!("Transform failed: {e}"))?;
            serde_json::to_string_pretty(&anchors)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        ("nav", "json") => {
            let sections = parse_sections(source).map_err(|e| format!("Transform failed: {e}"))?;
            serde_json::to_string_pretty(&sections)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        ("nav", "markdown") => {
            let sections = parse_sections(source).map_err(|e| format!("Transform failed: {e}"))?;
            registry
                .serialize(&nav_document(&sections, module_name), "markdown")
                .map_err(|e| format!("Serialization failed: {e}"))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAPTER: &str = r##"<html><body><div class="body">
        <div class="section" id="ID1"><h2>Closures</h2>
        <p>See <a href="#ID1">closures</a>.</p></div>
    </div></body></html>"##;

    const NAV: &str = r#"<nav><ol><li><a href="a.xhtml">Part</a>
        <ol><li><a href="Part/Chapter.xhtml">Chapter</a></li></ol></li></ol></nav>"#;

    #[test]
    fn ast_markdown_resolves_own_anchors() {
        let output = execute_transform(CHAPTER, "ast-markdown", "Swift").unwrap();
        assert!(output.contains("[closures](doc:/#Closures)"), "{output}");
    }

    #[test]
    fn anchors_json_is_an_object() {
        let output = execute_transform(CHAPTER, "anchors-json", "Swift").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ID1"], "Closures");
    }

    #[test]
    fn nav_transforms() {
        let json = execute_transform(NAV, "nav-json", "Swift").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Part");
        assert_eq!(value[0]["items"][0]["target_id"], "Chapter");

        let markdown = execute_transform(NAV, "nav-markdown", "Kit").unwrap();
        assert!(markdown.starts_with("# ``Kit``"), "{markdown}");
        assert!(markdown.contains("[Chapter](doc:Chapter)"), "{markdown}");
    }

    #[test]
    fn ast_json_comes_from_the_registry() {
        let output = execute_transform(CHAPTER, "ast-json", "Swift").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["children"].is_array(), "{output}");
    }

    #[test]
    fn output_file_extension_picks_tree_format() {
        let registry = FormatRegistry::default();
        assert_eq!(
            transform_for_output("Chapter.json", &registry).as_deref(),
            Some("ast-json")
        );
        assert_eq!(
            transform_for_output("out/Chapter.md", &registry).as_deref(),
            Some("ast-markdown")
        );
        assert_eq!(transform_for_output("Chapter.txt", &registry), None);
    }

    #[test]
    fn errors_are_reported_as_text() {
        let err = execute_transform("<p>no wrapper</p>", "ast-json", "Swift").unwrap_err();
        assert!(err.contains("div.body"), "{err}");
        assert!(execute_transform(CHAPTER, "bogus", "Swift").is_err());
        assert!(execute_transform(CHAPTER, "ast-tag", "Swift").is_err());
        assert!(execute_transform(CHAPTER, "anchors-markdown", "Swift").is_err());
    }
}
