//! The dump command: prompt → fetch → clone-all.

pub mod clone_all;
pub mod input;
pub mod manifest;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;
use url::Url;

use ghdump_api::{RepositoryDescriptor, RepositoryLister};
use ghdump_core::iostreams::IOStreams;
use ghdump_core::prompter::Prompter;
use ghdump_core::{UserSelection, ios_println};

use crate::factory::Factory;

pub use clone_all::{CloneAllError, CloneSummary, clone_all, output_target};
pub use input::{InputError, InputPreset, collect_input};

/// Output root used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "dumps";

/// Clone every public repository of a GitHub user or organization.
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Account type, skipping the prompt (`user` or `organization`).
    #[arg(long, env = "GHDUMP_KIND", value_name = "KIND")]
    kind: Option<String>,

    /// GitHub username, skipping the prompt.
    #[arg(long, env = "GHDUMP_USERNAME", value_name = "NAME")]
    username: Option<String>,

    /// Directory under which `<kind>_<username>` is created.
    #[arg(
        long,
        env = "GHDUMP_OUTPUT_DIR",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    output_dir: PathBuf,

    /// REST API base URL (GitHub Enterprise or a test server).
    #[arg(long, env = "GHDUMP_API_URL", value_name = "URL")]
    api_url: Option<Url>,
}

impl DumpArgs {
    /// Run the dump command.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of the pipeline; nothing is retried.
    pub async fn run(&self, factory: &Factory) -> Result<CloneSummary> {
        let ios = &factory.io;
        let prompter = factory.prompter();
        let mut client = factory.api_client()?;
        if let Some(ref url) = self.api_url {
            client = client.with_url_override(url.to_string());
        }

        let preset = InputPreset {
            kind: self.kind.clone(),
            username: self.username.clone(),
        };
        let (selection, repos) =
            resolve_repositories(ios, prompter.as_ref(), &client, &preset).await?;

        let git = factory.git_client()?;
        let summary = clone_all(ios, git, &repos, &selection, &self.output_dir).await?;
        Ok(summary)
    }
}

/// Collect the selection and list its repositories.
///
/// # Errors
///
/// Returns an [`InputError`] for bad input or a
/// [`ListError`](ghdump_api::ListError) when listing fails. No request is
/// made when input is invalid.
pub async fn resolve_repositories<L: RepositoryLister>(
    ios: &IOStreams,
    prompter: &dyn Prompter,
    lister: &L,
    preset: &InputPreset,
) -> Result<(UserSelection, Vec<RepositoryDescriptor>)> {
    let selection = collect_input(prompter, preset)?;
    let repos = fetch_repositories(ios, lister, &selection).await?;
    Ok((selection, repos))
}

/// List the repositories of `selection`, announcing the request first.
///
/// # Errors
///
/// Propagates the lister's [`ListError`](ghdump_api::ListError).
pub async fn fetch_repositories<L: RepositoryLister>(
    ios: &IOStreams,
    lister: &L,
    selection: &UserSelection,
) -> Result<Vec<RepositoryDescriptor>, ghdump_api::ListError> {
    let cs = ios.color_scheme();
    ios_println!(ios);
    ios_println!(
        ios,
        "{} {}",
        cs.info_icon(),
        cs.warning(&format!(
            "Fetching {} repositories for @{}...",
            selection.kind.slug(),
            selection.username
        ))
    );

    let repos = lister
        .list_repositories(selection.kind, &selection.username)
        .await?;
    debug!(count = repos.len(), "Fetched repositories");
    Ok(repos)
}
