//! GitHub REST API access for ghdump.
//!
//! Provides:
//! - HTTP client construction with default headers
//! - A small REST client with error mapping
//! - [`RepositoryDescriptor`](repo::RepositoryDescriptor) and the
//!   [`RepositoryLister`](lister::RepositoryLister) capability

pub mod client;
pub mod errors;
pub mod http;
pub mod lister;
pub mod repo;

pub use client::Client;
pub use errors::{ApiError, ListError};
pub use lister::RepositoryLister;
pub use repo::RepositoryDescriptor;
