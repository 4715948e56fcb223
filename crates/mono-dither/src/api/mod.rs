//! Public API for the mono-dither crate.
//!
//! This module provides the high-level entry point: [`Pipeline`] and its
//! [`DitherSummary`] result.

mod pipeline;

pub use pipeline::{DitherSummary, Pipeline};
