//! Implementation of the `genforge new` command.
//!
//! Responsibility: gather input interactively or from flags, call the core
//! services in order (scaffold, git, publish), and display results.  No
//! business logic lives here.
//!
//! Failure policy: anything before or during scaffolding is a hard error.
//! Once the template is on disk, git and GitHub failures degrade to
//! warnings and the command still exits 0 — the project directory is the
//! primary deliverable.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use genforge_adapters::{LocalFilesystem, ShellRunner};
use genforge_core::{
    application::{
        GitService, INITIAL_COMMIT_MESSAGE, PublishOutcome, PublishService, ScaffoldService,
        web_url,
    },
    domain::{DomainError, ProjectName, ProjectSpec, Visibility},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `genforge new` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the project name (flag or prompt)
/// 2. Confirm reuse of an existing directory unless `--yes`
/// 3. Scaffold the template, printing each created path
/// 4. Initialise git and create the initial commit (unless `--skip-git`)
/// 5. Resolve visibility and publish to GitHub (unless `--skip-github`)
/// 6. Print the summary and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project name
    let name = resolve_name(args.name.as_deref())?;
    let spec = ProjectSpec::in_current_dir(name).map_err(|e| CliError::Core(e.into()))?;

    debug!(project = %spec.name(), root = %spec.root().display(), "Project resolved");

    // 2. Existing directory: scaffolding overwrites, so ask first.
    if spec.root().exists() && !args.yes {
        output.warning(&format!(
            "Directory '{}' already exists; its template files will be overwritten",
            spec.root().display(),
        ))?;
        if !confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    // 3. Scaffold
    output.header(&format!("Creating '{}'...", spec.name()))?;
    info!(project = %spec.name(), "Scaffold started");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let created = service.scaffold(&spec).map_err(CliError::Core)?;

    for path in &created {
        output.print(&format!("  + {path}"))?;
    }
    output.success(&format!(
        "Project '{}' created ({} paths)",
        spec.name(),
        created.len(),
    ))?;

    if args.skip_git {
        print_next_steps(&spec, &output)?;
        return Ok(());
    }

    // 4. Git init + initial commit. Failures from here on are warnings.
    let runner = Arc::new(ShellRunner::new());
    let git = GitService::new(runner.clone());

    if !git.init_repo(spec.root(), &config.identity()) {
        output.warning("Git initialisation failed; continuing without version control")?;
        print_next_steps(&spec, &output)?;
        return Ok(());
    }
    output.success("Git repository initialized")?;

    if git.commit_all(spec.root(), INITIAL_COMMIT_MESSAGE) {
        output.success("Initial commit created")?;
    } else {
        output.warning("Initial commit failed")?;
    }

    if args.skip_github {
        print_local_summary(&spec, &output)?;
        return Ok(());
    }

    // 5. Publish to GitHub
    let visibility = resolve_visibility(&args, &config, &output)?;
    let publish = PublishService::new(runner);
    let owner = config.github.owner.as_deref();

    match publish.publish(&spec, visibility, owner) {
        outcome @ (PublishOutcome::Created | PublishOutcome::ReattachedExisting) => {
            if matches!(outcome, PublishOutcome::ReattachedExisting) {
                output.info("Repository already existed; pushed to it instead")?;
            }
            // Sweep up anything written after the initial commit.
            git.push_to_remote(spec.root());

            output.success("Project created and pushed to GitHub!")?;
            if let Some(owner) = publish.resolve_owner(owner) {
                output.print(&format!(
                    "Repository: {}",
                    web_url(&owner, spec.name().as_str()),
                ))?;
            }
            print_next_steps(&spec, &output)?;
        }
        PublishOutcome::ToolMissing => {
            output.warning("GitHub CLI (gh) is not installed; skipping GitHub")?;
            output.print("Install it from https://cli.github.com/ and re-run, or push later.")?;
            print_local_summary(&spec, &output)?;
        }
        PublishOutcome::NotAuthenticated => {
            output.warning("Not authenticated with GitHub; skipping GitHub")?;
            output.print("Run 'gh auth login' first.")?;
            print_local_summary(&spec, &output)?;
        }
        PublishOutcome::Failed(reason) => {
            output.warning(&format!("GitHub repository creation failed: {}", reason.trim()))?;
            print_local_summary(&spec, &output)?;
        }
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Validate the name from the command line, or prompt for one.
fn resolve_name(flag: Option<&str>) -> CliResult<ProjectName> {
    let raw = match flag {
        Some(name) => name.to_string(),
        None => ask("Project name: ")?,
    };

    ProjectName::parse(&raw).map_err(|e| match e {
        DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

/// Visibility from flags, config default under `--yes`, else a prompt.
fn resolve_visibility(
    args: &NewArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Visibility> {
    let visibility = if args.public {
        Visibility::Public
    } else if args.private {
        Visibility::Private
    } else if args.yes {
        config.github.default_visibility
    } else {
        // Only an explicit "n" selects private.
        let answer = ask("Should the GitHub repository be public? (y/n) [y]: ")?;
        match answer.to_ascii_lowercase().as_str() {
            "n" | "no" => Visibility::Private,
            _ => Visibility::Public,
        }
    };

    output.info(&format!("Repository will be created as {visibility}"))?;
    Ok(visibility)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn print_next_steps(spec: &ProjectSpec, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  1. cd {}", spec.name()))?;
    out.print("  2. Configure your API keys in .env")?;
    out.print("  3. uv sync")?;
    out.print("  4. uv run main.py")?;
    Ok(())
}

fn print_local_summary(spec: &ProjectSpec, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print(&format!("Location: {}", spec.root().display()))?;
    out.print("Git repository initialized with initial commit")?;
    print_next_steps(spec, out)?;
    out.print("")?;
    out.print("To push to GitHub later:")?;
    out.print(&format!(
        "  gh repo create {} --source=. --remote=origin --push",
        spec.name(),
    ))?;
    Ok(())
}

fn ask(prompt: &str) -> CliResult<String> {
    use std::io::{self, Write};

    print!("{prompt}");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read input".into(),
            source: e,
        })?;

    Ok(input.trim().to_string())
}

/// Only an explicit "y"/"yes" consents; anything else, including an empty
/// answer, declines.
fn confirm(question: &str) -> CliResult<bool> {
    let input = ask(&format!("{question} [y/N] "))?.to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
