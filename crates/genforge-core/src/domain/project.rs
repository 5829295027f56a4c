//! Project identity value objects.
//!
//! [`ProjectName`] is a validated newtype: once constructed it is guaranteed
//! non-empty and restricted to `[A-Za-z0-9_-]`, so every layer downstream can
//! splice it into paths, git URLs, and `gh` arguments without re-checking.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A validated project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a raw user-supplied name, trimming surrounding whitespace.
    ///
    /// Accepts only ASCII letters, digits, `-`, and `_`; rejects empty input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: format!("character '{bad}' is not allowed"),
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable description of one scaffolding run: the validated name and the
/// directory the template is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: ProjectName,
    root: PathBuf,
}

impl ProjectSpec {
    /// Place the project directly under `parent`.
    pub fn new(name: ProjectName, parent: &Path) -> Self {
        let root = parent.join(name.as_str());
        Self { name, root }
    }

    /// Place the project under the process's current working directory.
    pub fn in_current_dir(name: ProjectName) -> Result<Self, DomainError> {
        let cwd = std::env::current_dir().map_err(|e| DomainError::UnresolvablePath {
            reason: e.to_string(),
        })?;
        Ok(Self::new(name, &cwd))
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Repository visibility on the remote host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// The `gh repo create` flag for this visibility.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// Author identity configured on a freshly initialized repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

impl Default for GitIdentity {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            email: "you@example.com".into(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ProjectName::parse ────────────────────────────────────────────────

    #[test]
    fn valid_names_parse() {
        for name in ["demo_project", "my-app", "Project123", "a", "RAG_demo-2"] {
            assert!(ProjectName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let name = ProjectName::parse("  demo_project \n").unwrap();
        assert_eq!(name.as_str(), "demo_project");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ProjectName::parse(""), Err(DomainError::EmptyProjectName));
        assert_eq!(
            ProjectName::parse("   "),
            Err(DomainError::EmptyProjectName)
        );
    }

    #[test]
    fn names_with_forbidden_characters_are_rejected() {
        for name in ["bad name!", "a/b", "dot.name", "emoji🚀", "semi;rm"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted invalid name: {name}"
            );
        }
    }

    #[test]
    fn rejection_names_the_offending_character() {
        let err = ProjectName::parse("bad name!").unwrap_err();
        match err {
            DomainError::InvalidProjectName { reason, .. } => {
                assert!(reason.contains("' '"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ── ProjectSpec ───────────────────────────────────────────────────────

    #[test]
    fn spec_root_is_parent_joined_with_name() {
        let name = ProjectName::parse("demo_project").unwrap();
        let spec = ProjectSpec::new(name, Path::new("/workdir"));
        assert_eq!(spec.root(), Path::new("/workdir/demo_project"));
        assert_eq!(spec.name().as_str(), "demo_project");
    }

    // ── Visibility ────────────────────────────────────────────────────────

    #[test]
    fn visibility_flags() {
        assert_eq!(Visibility::Public.as_flag(), "--public");
        assert_eq!(Visibility::Private.as_flag(), "--private");
    }

    #[test]
    fn visibility_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn identity_default_is_placeholder() {
        let id = GitIdentity::default();
        assert_eq!(id.email, "you@example.com");
    }
}
