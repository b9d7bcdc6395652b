//! Markdown export tests
//!
//! Chapters are rendered, then parsed back with comrak to check structure
//! without depending on exact whitespace.

mod export;
