//! raads-core
//!
//! Pure domain types for the RAADS-R self-assessment: response choices,
//! answer sheets, dimensions, scores and recommendation entries.
//! No scoring tables live here. This is the shared vocabulary of the
//! RAADS workspace, exported to TypeScript for the web front end.

pub mod error;
pub mod models;
