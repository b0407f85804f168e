//! GitHub account model: entity kind, validated username, and the
//! selection a run operates on.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::CoreError;

/// Maximum length of a GitHub username.
pub const MAX_USERNAME_LEN: usize = 39;

/// Alphanumeric segments joined by single hyphens.
static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("USERNAME_RE is a valid regex")
});

/// Kind of GitHub account whose repositories are cloned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An individual user account.
    User,
    /// An organization account.
    Organization,
}

impl EntityKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::User, Self::Organization];

    /// Human-readable label (`User` / `Organization`).
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Organization => "Organization",
        }
    }

    /// REST API collection segment (`users` / `orgs`).
    pub fn collection(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Organization => "orgs",
        }
    }

    /// Lowercase slug used in output paths and progress messages.
    pub fn slug(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(Self::User),
            "org" | "orgs" | "organization" => Ok(Self::Organization),
            _ => Err(CoreError::UnknownEntityKind(s.to_string())),
        }
    }
}

/// A GitHub username that passed validation.
///
/// Case is preserved; GitHub itself treats usernames case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Clean and validate raw user input.
    ///
    /// Surrounding whitespace is trimmed and a single leading `@` is removed
    /// before the name is checked against GitHub's username grammar.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let cleaned = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if cleaned.is_empty() || cleaned.len() > MAX_USERNAME_LEN || !USERNAME_RE.is_match(cleaned)
        {
            return Err(CoreError::InvalidUsername {
                input: raw.to_string(),
            });
        }

        Ok(Self(cleaned.to_string()))
    }

    /// The username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The account a run clones: its kind and validated username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelection {
    /// User or organization.
    pub kind: EntityKind,
    /// Validated username.
    pub username: Username,
}

impl UserSelection {
    /// Create a new selection.
    pub fn new(kind: EntityKind, username: Username) -> Self {
        Self { kind, username }
    }

    /// Directory name for this selection's output (`<kind>_<username>`).
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.kind.slug(), self.username)
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}", self.kind, self.username)
    }
}
