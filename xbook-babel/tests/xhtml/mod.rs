//! Chapter transcoding tests against the sample book.

mod anchors;
mod chapters;
