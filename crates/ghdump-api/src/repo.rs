//! Repository descriptors returned by the listing endpoint.

use serde::{Deserialize, Serialize};
use url::Url;

/// The subset of a REST repository object needed to clone it.
///
/// Unknown fields in the API response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Repository name, used as the working-copy directory name.
    pub name: String,
    /// HTTPS clone URL.
    pub clone_url: Url,
    /// Browser URL, linked from the manifest.
    pub html_url: Url,
}
