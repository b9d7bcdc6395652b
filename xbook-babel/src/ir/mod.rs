//! Markup tree produced by the transcoders.
//!
//! This module defines the format-agnostic document tree that XHTML chapters
//! and the navigation document are converted into, and that the output
//! formats (Markdown, JSON) consume.

pub mod nodes;
