//! Test fixtures and data generators
//!
//! This module contains builders for creating VGM byte streams.

pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
