//! Fixture engine.
//!
//! Query construction, date normalisation, per-team extraction and the
//! sequential run loop that ties them together.

pub mod dates;
pub mod extractor;
pub mod query;
pub mod runner;
