use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn book_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("xbook-babel")
        .join("tests")
        .join("fixtures")
        .join("book")
}

#[test]
fn convert_is_the_default_command() {
    let output = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("xbook");
    cmd.arg(book_root()).arg("--output").arg(output.path());

    cmd.assert().success();

    let basics = fs::read_to_string(output.path().join("TheBasics.md")).unwrap();
    assert!(basics.contains("[the introduction](doc:AboutSwift#About-Swift)"));
    assert!(output.path().join("Assets/closure_syntax@2x.png").is_file());
}

#[test]
fn module_name_flag_overrides_config() {
    let output = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("xbook");
    cmd.arg("convert")
        .arg(book_root())
        .arg("-o")
        .arg(output.path())
        .arg("--module-name")
        .arg("SampleBook");

    cmd.assert().success();

    let landing = fs::read_to_string(output.path().join("SwiftBook.md")).unwrap();
    assert!(landing.starts_with("# ``SampleBook``"));
    let symbols = fs::read_to_string(output.path().join("Documentation.symbols.json")).unwrap();
    assert!(symbols.contains(r#""name":"SampleBook""#));
}

#[test]
fn config_file_changes_layout() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("xbook.toml");
    fs::write(
        &config_path,
        r#"[output]
nav_file = "Index.md"
static_files = false
"#,
    )
    .unwrap();

    let output = dir.path().join("out");
    let mut cmd = cargo_bin_cmd!("xbook");
    cmd.arg("convert")
        .arg(book_root())
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config_path);

    cmd.assert().success();
    assert!(output.join("Index.md").is_file());
    assert!(!output.join("Info.plist").exists());
}

#[test]
fn missing_book_fails_with_error() {
    let output = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("xbook");
    cmd.arg("convert")
        .arg(output.path().join("no-such-book"))
        .arg("--output")
        .arg(output.path().join("out"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("nav.xhtml")));
}
