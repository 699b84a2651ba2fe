//! CLI command implementations.

pub mod common;
pub mod estimate;
pub mod sample;
pub mod version;
