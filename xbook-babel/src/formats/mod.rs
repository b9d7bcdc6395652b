//! Format implementations
//!
//! Input formats (`xhtml`, `nav`, `opf`) turn book files into the markup tree
//! or into the data the book pipeline needs. Output formats (`markdown`,
//! `json`) implement [`crate::format::Format`].

pub mod json;
pub mod markdown;
pub mod nav;
pub mod opf;
pub mod xhtml;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use nav::{NavItem, NavSection};
pub use xhtml::{XhtmlChapter, XhtmlParser};
