//! Repository listing capability.

use std::future::Future;

use ghdump_core::{EntityKind, Username};
use tracing::{debug, info};

use crate::client::Client;
use crate::errors::ListError;
use crate::repo::RepositoryDescriptor;

/// Something that can list the public repositories of an account.
pub trait RepositoryLister: Send + Sync + std::fmt::Debug {
    /// List the first page of public repositories for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] on 404, [`ListError::NoRepositories`]
    /// for an empty listing, and [`ListError::Fetch`] for anything else.
    fn list_repositories(
        &self,
        kind: EntityKind,
        username: &Username,
    ) -> impl Future<Output = Result<Vec<RepositoryDescriptor>, ListError>> + Send;
}

/// REST path of the repository listing for an account.
pub fn repos_path(kind: EntityKind, username: &Username) -> String {
    format!("{}/{}/repos", kind.collection(), username)
}

impl RepositoryLister for Client {
    async fn list_repositories(
        &self,
        kind: EntityKind,
        username: &Username,
    ) -> Result<Vec<RepositoryDescriptor>, ListError> {
        let path = repos_path(kind, username);
        let repos: Vec<RepositoryDescriptor> = self
            .rest_get(&path)
            .await
            .map_err(|e| ListError::from_api(kind, username.clone(), e))?;

        if repos.is_empty() {
            debug!(%kind, %username, "Listing is empty");
            return Err(ListError::NoRepositories {
                kind,
                username: username.clone(),
            });
        }

        info!(%kind, %username, count = repos.len(), "Listed repositories");
        Ok(repos)
    }
}
