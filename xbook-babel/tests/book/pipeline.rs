use crate::common::book_root;
use std::fs;
use tempfile::tempdir;
use xbook_babel::{BookConverter, BookOptions, ConvertError};

#[test]
fn converts_sample_book() {
    let output = tempdir().unwrap();
    let report = BookConverter::new(book_root(), output.path(), BookOptions::default())
        .convert()
        .unwrap();

    assert_eq!(report.assets_copied, 2);
    assert_eq!(report.anchors_collected, 4);
    assert_eq!(
        report.chapters,
        vec![
            output.path().join("AboutSwift.md"),
            output.path().join("TheBasics.md"),
        ]
    );

    for file in [
        "Info.plist",
        "Documentation.symbols.json",
        "SwiftBook.md",
        "AboutSwift.md",
        "TheBasics.md",
    ] {
        assert!(output.path().join(file).is_file(), "missing {file}");
    }

    let assets = output.path().join("Assets");
    assert_eq!(
        fs::read_to_string(assets.join("closure_syntax.png")).unwrap(),
        "standard-resolution-image"
    );
    assert_eq!(
        fs::read_to_string(assets.join("closure_syntax@2x.png")).unwrap(),
        "high-resolution-image"
    );

    let plist = fs::read_to_string(output.path().join("Info.plist")).unwrap();
    assert!(plist.contains("<string>Programming Language</string>"));
}

#[test]
fn options_rename_outputs_and_skip_static_files() {
    let output = tempdir().unwrap();
    let options = BookOptions {
        module_name: "Sample".to_string(),
        nav_output: "Sample.md".to_string(),
        assets_dir: "Resources".to_string(),
        write_static_files: false,
        ..BookOptions::default()
    };
    BookConverter::new(book_root(), output.path(), options)
        .convert()
        .unwrap();

    let landing = fs::read_to_string(output.path().join("Sample.md")).unwrap();
    assert!(landing.starts_with("# ``Sample``"));
    assert!(output.path().join("Resources/closure_syntax@2x.png").is_file());
    assert!(!output.path().join("Info.plist").exists());
    assert!(!output.path().join("Documentation.symbols.json").exists());
}

#[test]
fn missing_images_directory_is_not_fatal() {
    let output = tempdir().unwrap();
    let options = BookOptions {
        images_dir: "no-such-dir".to_string(),
        ..BookOptions::default()
    };
    let report = BookConverter::new(book_root(), output.path(), options)
        .convert()
        .unwrap();
    assert_eq!(report.assets_copied, 0);
    assert_eq!(report.chapters.len(), 2);
}

#[test]
fn broken_chapter_leaves_no_chapter_output() {
    let book = tempdir().unwrap();
    let root = book.path();
    fs::copy(book_root().join("nav.xhtml"), root.join("nav.xhtml")).unwrap();
    fs::write(
        root.join("content.opf"),
        r#"<package><manifest>
             <item id="a" href="Good.xhtml"/><item id="b" href="Bad.xhtml"/>
           </manifest><spine><itemref idref="a"/><itemref idref="b"/></spine></package>"#,
    )
    .unwrap();
    fs::write(
        root.join("Good.xhtml"),
        r#"<html><body><div class="body"><p>fine</p></div></body></html>"#,
    )
    .unwrap();
    fs::write(
        root.join("Bad.xhtml"),
        r#"<html><body><div class="body"><ul><p>not an item</p></ul></div></body></html>"#,
    )
    .unwrap();

    let output = tempdir().unwrap();
    let result = BookConverter::new(root, output.path(), BookOptions::default()).convert();

    assert!(matches!(result, Err(ConvertError::UnexpectedTag { ref tag, .. }) if tag == "p"));
    assert!(!output.path().join("Good.md").exists());
    assert!(!output.path().join("Bad.md").exists());
}

#[test]
fn missing_manifest_reports_path() {
    let book = tempdir().unwrap();
    fs::copy(book_root().join("nav.xhtml"), book.path().join("nav.xhtml")).unwrap();

    let output = tempdir().unwrap();
    let err = BookConverter::new(book.path(), output.path(), BookOptions::default())
        .convert()
        .unwrap_err();
    assert!(matches!(err, ConvertError::Io { ref path, .. } if path.ends_with("content.opf")));
}
