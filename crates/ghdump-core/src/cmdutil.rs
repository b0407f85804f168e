//! Command utility types and helpers.

/// Error indicating user cancelled an operation.
#[derive(Debug, thiserror::Error)]
#[error("user cancelled")]
pub struct CancelError;

/// Check if an error represents a user cancellation.
///
/// The whole source chain is searched, so a [`CancelError`] wrapped by a
/// typed command error still counts.
pub fn is_user_cancellation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<CancelError>())
}
