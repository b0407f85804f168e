//! Core types, traits, and utilities for ghdump.
//!
//! This crate provides the foundational abstractions shared by the other
//! ghdump crates:
//! - [`IOStreams`] for terminal I/O handling
//! - [`Prompter`](prompter::Prompter) trait for interactive prompts
//! - [`UserSelection`] and the validated [`Username`] type

pub mod account;
pub mod cmdutil;
pub mod errors;
pub mod iostreams;
pub mod prompter;

pub use account::{EntityKind, UserSelection, Username};
pub use errors::CoreError;
pub use iostreams::IOStreams;
