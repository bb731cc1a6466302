//! File input and output.
//!
//! Reads the team list and writes the fixture table.

pub mod table;
pub mod teams;
