//! Whole-book pipeline tests.

mod pipeline;
