//! JSON dump of the markup tree
//!
//! Mostly useful for inspecting what a chapter converts to before Markdown
//! rendering flattens it.

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::ir::nodes::Document;

/// Pretty-printed `serde_json` rendering of a [`Document`]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Markup tree as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<String> {
        serde_json::to_string_pretty(doc).map_err(|e| ConvertError::Serialization(e.to_string()))
    }
}
