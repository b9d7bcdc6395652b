//! Logical asset names
//!
//! Book images come in standard and high-resolution flavours that share a base
//! name: `closure_syntax.png` and `closure_syntax_2x.png`. The markup only
//! ever refers to the logical name; the asset copier appends `@2x` to the
//! output file when the source was the high-resolution variant.

/// Suffix segment marking a high-resolution image.
const HI_RES_SEGMENT: &str = "2x";

/// The resolved name of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    pub name: String,
    pub hi_res: bool,
}

impl AssetName {
    /// File name for the copied asset: `name[@2x].ext`.
    pub fn file_name(&self, extension: Option<&str>) -> String {
        let mut file_name = self.name.clone();
        if self.hi_res {
            file_name.push_str("@2x");
        }
        if let Some(ext) = extension.filter(|ext| !ext.is_empty()) {
            file_name.push('.');
            file_name.push_str(ext);
        }
        file_name
    }
}

/// Resolves a base file name (extension already stripped) to its logical name.
///
/// The name is split on underscores, empty segments are dropped, and a final
/// `2x` segment marks the high-resolution variant.
pub fn asset_name(base_name: &str) -> AssetName {
    let mut segments: Vec<&str> = base_name.split('_').filter(|s| !s.is_empty()).collect();
    let hi_res = segments.last() == Some(&HI_RES_SEGMENT);
    if hi_res {
        segments.pop();
    }
    AssetName {
        name: segments.join("_"),
        hi_res,
    }
}
