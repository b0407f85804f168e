//! Manifest listing the repositories of a dump.

use std::fmt::Write as _;

use ghdump_api::RepositoryDescriptor;
use ghdump_core::UserSelection;

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "README.md";

/// Render the Markdown manifest for `selection`.
///
/// Repositories are listed in the order given, one link per line.
pub fn render_manifest(selection: &UserSelection, repos: &[RepositoryDescriptor]) -> String {
    let mut out = format!(
        "# {} @{}\n\n## Repositories\n\n",
        selection.kind, selection.username
    );
    for repo in repos {
        let _ = writeln!(out, "- [{}]({})", repo.name, repo.html_url);
    }
    out
}
