//! Publish Service - remote repository creation via the `gh` CLI.
//!
//! State machine: probe the tool, probe authentication, create the remote
//! (pushing as part of creation), and reconcile the one recoverable failure
//! class — "already exists" — by attaching the existing remote and pushing
//! once. Everything else is terminal and reported verbatim.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{ports::CommandRunner, services::GitService},
    domain::{ProjectSpec, RemoteFailure, Visibility, classify_remote_error},
};

/// Result of a publish attempt, for the driver to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Remote created and pushed as part of creation.
    Created,
    /// Remote already existed; `origin` was attached and `main` pushed.
    ReattachedExisting,
    /// The `gh` CLI is not installed. Terminal.
    ToolMissing,
    /// `gh` is installed but not authenticated. Terminal.
    NotAuthenticated,
    /// Creation failed for any other reason; carries the raw error text.
    Failed(String),
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created | Self::ReattachedExisting)
    }
}

/// Creates and reconciles the remote GitHub repository.
pub struct PublishService {
    runner: Arc<dyn CommandRunner>,
    git: GitService,
}

impl PublishService {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        let git = GitService::new(runner.clone());
        Self { runner, git }
    }

    /// `true` if the `gh` CLI can be run at all.
    pub fn cli_available(&self) -> bool {
        self.runner.run("gh", &["--version"], None).succeeded
    }

    /// `true` if `gh auth status` reports an authenticated user.
    pub fn authenticated(&self) -> bool {
        self.runner.run("gh", &["auth", "status"], None).succeeded
    }

    /// The account owning newly created repositories: the configured
    /// override if present, else the authenticated login.
    pub fn resolve_owner(&self, configured: Option<&str>) -> Option<String> {
        if let Some(owner) = configured {
            return Some(owner.to_string());
        }

        let result = self.runner.run("gh", &["api", "user", "--jq", ".login"], None);
        if result.succeeded && result.has_output() {
            Some(result.stdout.trim().to_string())
        } else {
            None
        }
    }

    /// Create the remote repository and push.
    ///
    /// Only a creation failure classified as [`RemoteFailure::AlreadyExists`]
    /// triggers the reattach fallback, and the fallback push is attempted
    /// exactly once.
    #[instrument(skip_all, fields(project = %spec.name(), visibility = %visibility))]
    pub fn publish(
        &self,
        spec: &ProjectSpec,
        visibility: Visibility,
        configured_owner: Option<&str>,
    ) -> PublishOutcome {
        if !self.cli_available() {
            warn!("GitHub CLI (gh) is not installed");
            return PublishOutcome::ToolMissing;
        }

        if !self.authenticated() {
            warn!("Not authenticated with GitHub");
            return PublishOutcome::NotAuthenticated;
        }

        let name = spec.name().as_str();
        let create = self.runner.run(
            "gh",
            &[
                "repo",
                "create",
                name,
                visibility.as_flag(),
                "--source=.",
                "--remote=origin",
                "--push",
            ],
            Some(spec.root()),
        );

        if create.succeeded {
            info!(%visibility, "GitHub repository created");
            return PublishOutcome::Created;
        }

        match classify_remote_error(&create.stderr) {
            RemoteFailure::AlreadyExists => {
                info!("Repository already exists, attaching remote and pushing");
                self.reattach_and_push(spec, configured_owner, create.stderr)
            }
            _ => {
                warn!(stderr = %create.stderr.trim(), "GitHub repository creation failed");
                PublishOutcome::Failed(create.stderr)
            }
        }
    }

    fn reattach_and_push(
        &self,
        spec: &ProjectSpec,
        configured_owner: Option<&str>,
        create_stderr: String,
    ) -> PublishOutcome {
        let Some(owner) = self.resolve_owner(configured_owner) else {
            warn!("Cannot determine repository owner for the existing remote");
            return PublishOutcome::Failed(
                "repository already exists, but the owner account could not be determined; \
                 set [github].owner in the configuration"
                    .into(),
            );
        };

        let url = ssh_remote_url(&owner, spec.name().as_str());
        self.git.add_remote(spec.root(), &url);

        if self.git.push_upstream(spec.root()) {
            info!(%url, "Pushed to existing repository");
            PublishOutcome::ReattachedExisting
        } else {
            PublishOutcome::Failed(create_stderr)
        }
    }
}

/// SSH-style remote URL for an owner/name pair.
pub fn ssh_remote_url(owner: &str, name: &str) -> String {
    format!("git@github.com:{owner}/{name}.git")
}

/// Browsable HTTPS URL for an owner/name pair.
pub fn web_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{owner}/{name}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
