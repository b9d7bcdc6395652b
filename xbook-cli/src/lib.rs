//! Library half of the `xbook` binary, so integration tests can reach the
//! inspect transforms directly.

pub mod transforms;
