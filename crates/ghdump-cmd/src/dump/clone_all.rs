//! Cloning every listed repository into a fresh output directory.

use std::io;
use std::path::{Path, PathBuf};

use ghdump_api::RepositoryDescriptor;
use ghdump_core::iostreams::IOStreams;
use ghdump_core::{UserSelection, ios_eprintln, ios_println};
use ghdump_git::{Cloner, GitError};
use tracing::{debug, info, warn};

use super::manifest::{MANIFEST_FILE, render_manifest};

/// Outcome of a batch in which every clone succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneSummary {
    /// Directory holding the manifest and the working copies.
    pub target: PathBuf,
    /// Names of the cloned repositories, in clone order.
    pub cloned: Vec<String>,
}

/// Failure while cloning a batch.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CloneAllError {
    /// A clone failed and the rest of the batch was not attempted.
    #[error("stopped after failing to clone {name}; {skipped} remaining repositories were not cloned")]
    Aborted {
        /// Repository whose clone failed.
        name: String,
        /// Number of repositories after it that were never attempted.
        skipped: usize,
        /// Underlying git failure.
        #[source]
        source: GitError,
    },

    /// The output directory or manifest could not be written.
    #[error("failed to prepare output directory {}: {source}", path.display())]
    Output {
        /// Path being prepared.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Directory that receives the dump for `selection`.
pub fn output_target(output_root: &Path, selection: &UserSelection) -> PathBuf {
    output_root.join(selection.dir_name())
}

/// Delete `target` if present, then recreate it empty.
async fn reset_dir(target: &Path) -> Result<(), CloneAllError> {
    let output_err = |source: io::Error| CloneAllError::Output {
        path: target.to_path_buf(),
        source,
    };

    match tokio::fs::remove_dir_all(target).await {
        Ok(()) => debug!(path = %target.display(), "Removed previous output"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(output_err(e)),
    }
    tokio::fs::create_dir_all(target).await.map_err(output_err)
}

/// Reset the output directory, write the manifest, and clone each repository
/// in listing order.
///
/// The first failed clone stops the batch; the manifest has already been
/// written by then and still lists every repository.
///
/// # Errors
///
/// Returns [`CloneAllError::Output`] if the directory or manifest cannot be
/// written, and [`CloneAllError::Aborted`] on the first failed clone.
pub async fn clone_all<C: Cloner>(
    ios: &IOStreams,
    cloner: &C,
    repos: &[RepositoryDescriptor],
    selection: &UserSelection,
    output_root: &Path,
) -> Result<CloneSummary, CloneAllError> {
    let cs = ios.color_scheme();
    ios_println!(
        ios,
        "{} Cloning {} repositories for @{}...",
        cs.info_icon(),
        selection.kind.slug(),
        selection.username,
    );

    let target = output_target(output_root, selection);
    reset_dir(&target).await?;

    let manifest_path = target.join(MANIFEST_FILE);
    tokio::fs::write(&manifest_path, render_manifest(selection, repos))
        .await
        .map_err(|source| CloneAllError::Output {
            path: manifest_path.clone(),
            source,
        })?;

    let mut cloned = Vec::with_capacity(repos.len());
    for (index, repo) in repos.iter().enumerate() {
        ios_println!(ios);
        ios_println!(ios, "{} Cloning {}...", cs.info_icon(), cs.blue(&repo.name));

        let dest = target.join(&repo.name);
        if let Err(e) = cloner.clone_repository(repo.clone_url.as_str(), &dest).await {
            let message = format!("Error cloning {}: {e}", repo.name);
            ios_eprintln!(ios, "{} {}", cs.error_icon(), cs.error(&message));
            let skipped = repos.len() - index - 1;
            warn!(name = %repo.name, skipped, "Clone failed, stopping batch");
            return Err(CloneAllError::Aborted {
                name: repo.name.clone(),
                skipped,
                source: e,
            });
        }

        ios_println!(ios, "{} Cloned {}", cs.success_icon(), cs.blue(&repo.name));
        cloned.push(repo.name.clone());
    }

    ios_println!(ios);
    ios_println!(
        ios,
        "{} {}",
        cs.success_icon(),
        cs.success("All repositories cloned successfully.")
    );
    info!(path = %target.display(), count = cloned.len(), "Dump complete");

    Ok(CloneSummary { target, cloned })
}
