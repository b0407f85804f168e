//! Git CLI wrapper for ghdump.
//!
//! Wraps the system `git` binary and exposes the [`Cloner`] capability used
//! to fetch working copies.

pub mod client;
pub mod errors;

pub use client::{Cloner, GitClient};
pub use errors::GitError;
