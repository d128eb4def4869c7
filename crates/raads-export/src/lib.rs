//! raads-export
//!
//! Markdown report rendering from a scored RAADS-R result.

pub mod context;
pub mod error;
pub mod render;
