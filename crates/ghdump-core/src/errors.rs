//! Core error types for ghdump.

/// Errors originating from core operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The username does not follow GitHub's naming rules.
    #[error("please enter a valid GitHub username (got {input:?})")]
    InvalidUsername {
        /// The raw input as typed by the user.
        input: String,
    },

    /// The entity kind is neither a user nor an organization.
    #[error("unknown account type {0:?}: expected `user` or `organization`")]
    UnknownEntityKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_invalid_username() {
        let err = CoreError::InvalidUsername {
            input: "bad--name".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("valid GitHub username"));
        assert!(msg.contains("bad--name"));
    }

    #[test]
    fn test_should_display_unknown_entity_kind() {
        let err = CoreError::UnknownEntityKind("team".to_string());
        assert_eq!(
            err.to_string(),
            "unknown account type \"team\": expected `user` or `organization`",
        );
    }
}
