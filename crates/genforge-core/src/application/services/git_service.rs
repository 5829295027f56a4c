//! Git Service - local repository lifecycle.
//!
//! Drives the `git` binary through the [`CommandRunner`] port: repository
//! initialization with a configured author identity, change detection via
//! porcelain status, staging/committing, and the push-with-rename-retry
//! orchestration. Every operation returns a plain `bool`; command failures
//! are policy decisions for the caller, never errors.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::CommandRunner,
    domain::GitIdentity,
};

/// Commit message for the first commit after scaffolding.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Generative AI project structure";

/// Commit message used when the push orchestrator finds stray changes.
pub const CATCH_UP_COMMIT_MESSAGE: &str = "Project files";

/// Local version-control operations against a project directory.
pub struct GitService {
    runner: Arc<dyn CommandRunner>,
}

impl GitService {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Initialize a repository in `root` and set a repo-scoped author
    /// identity. Returns `false` if `git init` fails; the caller must then
    /// skip every remote step for this run.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn init_repo(&self, root: &Path, identity: &GitIdentity) -> bool {
        let init = self.runner.run("git", &["init"], Some(root));
        if !init.succeeded {
            warn!(stderr = %init.stderr.trim(), "git init failed");
            return false;
        }

        // Identity is best-effort: a failure here leaves git's own
        // defaults in place and does not abandon the repository.
        self.runner
            .run("git", &["config", "user.email", &identity.email], Some(root));
        self.runner
            .run("git", &["config", "user.name", &identity.name], Some(root));

        info!("Git repository initialized");
        true
    }

    /// `true` if `git status --porcelain` reports any pending change.
    pub fn has_pending_changes(&self, root: &Path) -> bool {
        self.runner
            .run("git", &["status", "--porcelain"], Some(root))
            .has_output()
    }

    /// Stage everything and commit with `message`. Returns the commit
    /// result; `false` usually means there was nothing to commit.
    pub fn commit_all(&self, root: &Path, message: &str) -> bool {
        self.runner.run("git", &["add", "."], Some(root));
        self.runner
            .run("git", &["commit", "-m", message], Some(root))
            .succeeded
    }

    /// `true` if a remote named `origin` is configured.
    pub fn has_remote(&self, root: &Path) -> bool {
        self.runner
            .run("git", &["remote", "get-url", "origin"], Some(root))
            .succeeded
    }

    /// Attach a remote named `origin` pointing at `url`.
    pub fn add_remote(&self, root: &Path, url: &str) -> bool {
        self.runner
            .run("git", &["remote", "add", "origin", url], Some(root))
            .succeeded
    }

    /// Push `main` to `origin` with upstream tracking.
    pub fn push_upstream(&self, root: &Path) -> bool {
        self.runner
            .run("git", &["push", "-u", "origin", "main"], Some(root))
            .succeeded
    }

    /// Rename the current branch to `main`.
    pub fn rename_branch_to_main(&self, root: &Path) -> bool {
        self.runner
            .run("git", &["branch", "-M", "main"], Some(root))
            .succeeded
    }

    /// Commit any pending changes and push to `origin`.
    ///
    /// Sequence (the commit is always attempted before any push):
    /// 1. porcelain status; if non-empty, stage and commit — a commit
    ///    failure is logged and the run continues,
    /// 2. bail out with `false` if no `origin` remote is configured,
    /// 3. push with upstream tracking; on failure rename the current
    ///    branch to `main` and retry the push once.
    ///
    /// Returns `true` iff some push attempt succeeded.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn push_to_remote(&self, root: &Path) -> bool {
        if self.has_pending_changes(root) {
            info!("Uncommitted changes found, committing");
            if self.commit_all(root, CATCH_UP_COMMIT_MESSAGE) {
                info!("Changes committed");
            } else {
                warn!("Nothing to commit after staging");
            }
        } else {
            debug!("Working tree clean, no commit needed");
        }

        if !self.has_remote(root) {
            warn!("No remote named 'origin' configured, nothing to push to");
            return false;
        }

        if self.push_upstream(root) {
            info!("Pushed to origin");
            return true;
        }

        warn!("Push failed, renaming branch to main and retrying");
        self.rename_branch_to_main(root);
        let pushed = self.push_upstream(root);
        if pushed {
            info!("Pushed to origin after branch rename");
        }
        pushed
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
