//! Command implementation for ghdump.
//!
//! The `dump` module drives the prompt → fetch → clone-all pipeline;
//! `factory` wires its dependencies and `report` renders fatal errors.

pub mod dump;
pub mod factory;
pub mod report;

#[cfg(test)]
pub mod test_helpers;
