//! Whole-book conversion pipeline.
//!
//! Turns an unpacked XHTML book into a documentation catalog directory:
//!
//! ```text
//! <output>/
//! ├── Info.plist
//! ├── Documentation.symbols.json
//! ├── SwiftBook.md          # landing page from the navigation document
//! ├── <Chapter>.md          # one per spine entry
//! └── Assets/               # images under their logical names
//! ```
//!
//! Chapters are transcoded in two phases (see [`crate::formats::xhtml`]).
//! Every chapter is rendered in memory before the first chapter file is
//! written, so a structural error in any chapter leaves no chapter output.

use crate::common::{asset_name, AnchorMap};
use crate::error::{ConvertError, Result};
use crate::formats::markdown::serializer::serialize_to_markdown;
use crate::formats::nav;
use crate::formats::opf::parse_spine;
use crate::formats::xhtml::XhtmlChapter;
use crate::ir::nodes::Document;
use std::fs;
use std::path::{Path, PathBuf};

/// File names and layout choices for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOptions {
    /// Package document, relative to the book root.
    pub manifest: String,
    /// Navigation document, relative to the book root.
    pub nav: String,
    /// Image directory, relative to the book root.
    pub images_dir: String,
    /// Module the catalog documents; titles the landing page.
    pub module_name: String,
    /// Asset directory, relative to the output directory.
    pub assets_dir: String,
    /// Landing page file name in the output directory.
    pub nav_output: String,
    pub write_static_files: bool,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            manifest: "content.opf".to_string(),
            nav: "nav.xhtml".to_string(),
            images_dir: "_images".to_string(),
            module_name: "Swift".to_string(),
            assets_dir: "Assets".to_string(),
            nav_output: "SwiftBook.md".to_string(),
            write_static_files: true,
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookReport {
    /// Chapter files written, in spine order.
    pub chapters: Vec<PathBuf>,
    pub assets_copied: usize,
    pub anchors_collected: usize,
}

pub struct BookConverter {
    root: PathBuf,
    output: PathBuf,
    options: BookOptions,
}

impl BookConverter {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>, options: BookOptions) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            options,
        }
    }

    /// Runs the whole pipeline.
    pub fn convert(&self) -> Result<BookReport> {
        let assets_dir = self.output.join(&self.options.assets_dir);
        create_dir(&self.output)?;
        create_dir(&assets_dir)?;

        if self.options.write_static_files {
            self.write_static_files()?;
        }

        let assets_copied = self.copy_assets(&assets_dir)?;
        self.convert_nav()?;

        let spine = parse_spine(&read(&self.root.join(&self.options.manifest))?)?;
        log::debug!("spine lists {} chapters", spine.len());

        let sources = spine
            .iter()
            .map(|path| Ok((path.clone(), read(&self.root.join(path))?)))
            .collect::<Result<Vec<_>>>()?;
        let (anchors, documents) = transcode(&sources)?;

        let rendered = documents
            .iter()
            .map(|(path, doc)| Ok((self.chapter_output(path), serialize_to_markdown(doc)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut chapters = Vec::with_capacity(rendered.len());
        for (path, markdown) in rendered {
            write(&path, markdown)?;
            chapters.push(path);
        }

        log::info!(
            "converted {} chapters, {} assets, {} anchors into {}",
            chapters.len(),
            assets_copied,
            anchors.len(),
            self.output.display()
        );

        Ok(BookReport {
            chapters,
            assets_copied,
            anchors_collected: anchors.len(),
        })
    }

    fn write_static_files(&self) -> Result<()> {
        write(&self.output.join("Info.plist"), INFO_PLIST)?;
        write(
            &self.output.join("Documentation.symbols.json"),
            symbol_graph(&self.options.module_name)?,
        )
    }

    /// Copies every file of the image directory under its logical name.
    fn copy_assets(&self, assets_dir: &Path) -> Result<usize> {
        let images_dir = self.root.join(&self.options.images_dir);
        if !images_dir.is_dir() {
            log::warn!(
                "image directory {} not found, no assets copied",
                images_dir.display()
            );
            return Ok(0);
        }

        let mut images = fs::read_dir(&images_dir)
            .map_err(|e| ConvertError::io(&images_dir, e))?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| ConvertError::io(&images_dir, e))?;
        images.retain(|path| path.is_file());
        images.sort();

        for image in &images {
            let stem = image
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            let extension = image.extension().and_then(|ext| ext.to_str());
            let destination = assets_dir.join(asset_name(stem).file_name(extension));

            log::debug!("copying {} to {}", image.display(), destination.display());
            fs::copy(image, &destination).map_err(|e| ConvertError::io(&destination, e))?;
        }

        Ok(images.len())
    }

    fn convert_nav(&self) -> Result<()> {
        let source = read(&self.root.join(&self.options.nav))?;
        let sections = nav::parse_sections(&source)?;
        let doc = nav::nav_document(&sections, &self.options.module_name);
        write(
            &self.output.join(&self.options.nav_output),
            serialize_to_markdown(&doc)?,
        )
    }

    /// `<output>/<chapter file stem>.md`
    fn chapter_output(&self, chapter: &str) -> PathBuf {
        let stem = Path::new(chapter)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| chapter.to_string());
        self.output.join(format!("{stem}.md"))
    }
}

/// Runs both transcoding phases over in-memory chapters, returning each
/// chapter's tree under the name it was given.
pub fn convert_chapters(chapters: &[(String, String)]) -> Result<Vec<(String, Document)>> {
    transcode(chapters).map(|(_, documents)| documents)
}

fn transcode(chapters: &[(String, String)]) -> Result<(AnchorMap, Vec<(String, Document)>)> {
    let parsed: Vec<(&str, XhtmlChapter)> = chapters
        .iter()
        .map(|(name, source)| (name.as_str(), XhtmlChapter::parse(source)))
        .collect();

    let mut anchors = AnchorMap::new();
    for (name, chapter) in &parsed {
        let found = chapter.collect_anchors()?;
        log::debug!("{name}: {} anchors", found.len());
        anchors.merge(found);
    }

    let documents = parsed
        .iter()
        .map(|(name, chapter)| {
            log::debug!("transcoding {name}");
            Ok((name.to_string(), chapter.convert(&anchors)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((anchors, documents))
}

const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CDDefaultModuleKind</key>
    <string>Programming Language</string>
</dict>
</plist>
"#;

/// An empty symbol graph that makes the catalog a module's documentation.
fn symbol_graph(module_name: &str) -> Result<String> {
    let graph = serde_json::json!({
        "metadata": {
            "formatVersion": { "major": 0, "minor": 5, "patch": 3 },
            "generator": concat!("xbook ", env!("CARGO_PKG_VERSION")),
        },
        "module": {
            "name": module_name,
            "platform": { "architecture": "arm64", "vendor": "apple" },
        },
        "symbols": [],
        "relationships": [],
    });
    serde_json::to_string(&graph).map_err(|e| ConvertError::Serialization(e.to_string()))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))
}

fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, contents).map_err(|e| ConvertError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(body: &str) -> String {
        format!(r#"<html><body><div class="body">{body}</div></body></html>"#)
    }

    #[test]
    fn later_chapters_resolve_earlier_and_later_anchors() {
        let chapters = vec![
            (
                "First.xhtml".to_string(),
                chapter(r#"<p><a href="Second.xhtml#ID2">ahead</a></p>"#),
            ),
            (
                "Second.xhtml".to_string(),
                chapter(r#"<div class="section" id="ID2"><h2>Closures</h2></div>"#),
            ),
        ];
        let docs = convert_chapters(&chapters).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].0, "First.xhtml");
        let markdown = serialize_to_markdown(&docs[0].1).unwrap();
        assert!(markdown.contains("[ahead](doc:Second#Closures)"), "{markdown}");
    }

    #[test]
    fn first_anchor_definition_wins() {
        let chapters = vec![
            (
                "A.xhtml".to_string(),
                chapter(r#"<div class="section" id="X"><h2>From A</h2></div>"#),
            ),
            (
                "B.xhtml".to_string(),
                chapter(
                    r##"<div class="section" id="X"><h2>From B</h2></div><p><a href="#X">x</a></p>"##,
                ),
            ),
        ];
        let docs = convert_chapters(&chapters).unwrap();
        let markdown = serialize_to_markdown(&docs[1].1).unwrap();
        assert!(markdown.contains("(doc:/#From-A)"), "{markdown}");
    }

    #[test]
    fn one_bad_chapter_fails_the_batch() {
        let chapters = vec![
            ("Good.xhtml".to_string(), chapter("<p>fine</p>")),
            ("Bad.xhtml".to_string(), "<html><body></body></html>".to_string()),
        ];
        assert!(matches!(
            convert_chapters(&chapters),
            Err(ConvertError::MissingElement(_))
        ));
    }

    #[test]
    fn symbol_graph_names_module() {
        let json: serde_json::Value = serde_json::from_str(&symbol_graph("Swift").unwrap()).unwrap();
        assert_eq!(json["module"]["name"], "Swift");
        assert_eq!(json["metadata"]["formatVersion"]["minor"], 5);
        assert!(json["symbols"].as_array().unwrap().is_empty());
    }

    #[test]
    fn chapter_output_uses_file_stem() {
        let converter = BookConverter::new("/book", "/out", BookOptions::default());
        assert_eq!(
            converter.chapter_output("LanguageGuide/TheBasics.xhtml"),
            PathBuf::from("/out/TheBasics.md")
        );
    }
}
