//! Format-independent helpers shared by the transcoders and the book pipeline.

pub mod anchors;
pub mod assets;
pub mod fragment;
pub mod links;

pub use anchors::AnchorMap;
pub use assets::{asset_name, AssetName};
pub use fragment::url_readable_fragment;
pub use links::{resolve_image_source, resolve_link_destination};
