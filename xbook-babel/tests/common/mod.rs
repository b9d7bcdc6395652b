//! Fixture access shared by the integration tests.

use std::path::PathBuf;

/// Root of the sample book under `tests/fixtures/book`.
pub fn book_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/book")
}

pub fn read_fixture(relative: &str) -> String {
    std::fs::read_to_string(book_root().join(relative))
        .unwrap_or_else(|e| panic!("fixture {relative}: {e}"))
}

/// Both sample chapters, in spine order, as `(name, source)` pairs.
pub fn sample_chapters() -> Vec<(String, String)> {
    ["GuidedTour/AboutSwift.xhtml", "LanguageGuide/TheBasics.xhtml"]
        .into_iter()
        .map(|path| (path.to_string(), read_fixture(path)))
        .collect()
}
