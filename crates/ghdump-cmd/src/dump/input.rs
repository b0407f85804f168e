//! Collecting the account to clone from the user.

use ghdump_core::cmdutil::{CancelError, is_user_cancellation};
use ghdump_core::prompter::Prompter;
use ghdump_core::{CoreError, EntityKind, UserSelection, Username};
use tracing::debug;

/// Question asked to choose between a user and an organization.
pub const KIND_PROMPT: &str = "Clone repositories for a user or organization?";

/// Question asked for the account name.
pub const USERNAME_PROMPT: &str = "Enter the GitHub username";

/// Answers supplied ahead of time (flags or environment).
///
/// A present answer skips its prompt but is validated like typed input.
#[derive(Debug, Clone, Default)]
pub struct InputPreset {
    /// Pre-supplied raw account kind (`user` or `organization`).
    pub kind: Option<String>,
    /// Pre-supplied raw username.
    pub username: Option<String>,
}

/// Failure to obtain a valid selection.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    /// The username does not follow GitHub's naming rules.
    #[error("Please enter a valid GitHub username.")]
    InvalidUsername(#[source] CoreError),

    /// The preset account kind is neither a user nor an organization.
    #[error(transparent)]
    InvalidKind(CoreError),

    /// The user dismissed a prompt.
    #[error("prompt cancelled")]
    Cancelled(#[source] CancelError),

    /// The terminal could not be prompted.
    #[error("failed to read {field}: {message}")]
    Prompt {
        /// Which answer was being read.
        field: &'static str,
        /// Underlying prompt failure.
        message: String,
    },
}

impl InputError {
    fn from_prompt(field: &'static str, err: &anyhow::Error) -> Self {
        if is_user_cancellation(err) {
            Self::Cancelled(CancelError)
        } else {
            Self::Prompt {
                field,
                message: format!("{err:#}"),
            }
        }
    }
}

/// Ask for the account kind and username, then validate the username.
///
/// # Errors
///
/// Returns [`InputError::InvalidKind`] or [`InputError::InvalidUsername`]
/// when validation fails; nothing is retried.
pub fn collect_input(
    prompter: &dyn Prompter,
    preset: &InputPreset,
) -> Result<UserSelection, InputError> {
    let kind = match preset.kind {
        Some(ref raw) => raw.parse().map_err(InputError::InvalidKind)?,
        None => {
            let options: Vec<String> = EntityKind::ALL
                .iter()
                .map(|k| k.label().to_string())
                .collect();
            let index = prompter
                .select(KIND_PROMPT, Some(0), &options)
                .map_err(|e| InputError::from_prompt("account type", &e))?;
            EntityKind::ALL
                .get(index)
                .copied()
                .ok_or_else(|| InputError::Prompt {
                    field: "account type",
                    message: format!("no option at index {index}"),
                })?
        }
    };

    let raw = match preset.username {
        Some(ref name) => name.clone(),
        None => prompter
            .input(USERNAME_PROMPT, "")
            .map_err(|e| InputError::from_prompt("username", &e))?,
    };

    let username = Username::parse(&raw).map_err(InputError::InvalidUsername)?;
    debug!(%kind, %username, "Collected input");
    Ok(UserSelection::new(kind, username))
}
