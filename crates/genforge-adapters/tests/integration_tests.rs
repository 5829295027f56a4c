//! Integration tests wiring the application services to the test adapters.

use std::path::Path;
use std::sync::Arc;

use genforge_adapters::{MemoryFilesystem, ScriptedRunner};
use genforge_core::{
    application::{GitService, PublishOutcome, PublishService, ScaffoldService},
    prelude::Filesystem,
    domain::{CommandResult, GitIdentity, ProjectName, ProjectSpec, Visibility, template},
};

fn spec() -> ProjectSpec {
    ProjectSpec::new(
        ProjectName::parse("demo_project").unwrap(),
        Path::new("/work"),
    )
}

// ── Scaffolding ───────────────────────────────────────────────────────────────

#[test]
fn scaffold_produces_the_complete_fixed_tree() {
    let filesystem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let created = service.scaffold(&spec()).unwrap();
    assert_eq!(
        created.len(),
        template::DIRECTORIES.len() + template::all_files("demo_project").len()
    );

    let root = Path::new("/work/demo_project");
    for dir in template::DIRECTORIES {
        assert!(filesystem.exists(&root.join(dir)), "missing directory: {dir}");
    }
    for file in template::all_files("demo_project") {
        assert!(
            filesystem.read_file(&root.join(file.path)).is_some(),
            "missing file: {}",
            file.path
        );
    }
}

#[test]
fn scaffold_interpolates_the_project_name() {
    let filesystem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));
    service.scaffold(&spec()).unwrap();

    let root = Path::new("/work/demo_project");
    let readme = filesystem.read_file(&root.join("docs/README.md")).unwrap();
    assert!(readme.starts_with("# demo_project"));

    let pyproject = filesystem.read_file(&root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"demo_project\""));
}

#[test]
fn scaffold_is_idempotent() {
    let filesystem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let first = service.scaffold(&spec()).unwrap();
    let second = service.scaffold(&spec()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        filesystem.list_files().len(),
        template::all_files("demo_project").len()
    );
}

// ── Git orchestration ─────────────────────────────────────────────────────────

#[test]
fn init_then_push_round_trip() {
    let runner = ScriptedRunner::new()
        .respond("git status", CommandResult::ok("?? main.py\n"));
    let git = GitService::new(Arc::new(runner.clone()));
    let root = Path::new("/work/demo_project");

    assert!(git.init_repo(root, &GitIdentity::default()));
    assert!(git.push_to_remote(root));

    let calls = runner.calls();
    assert_eq!(calls[0], "git init");
    assert!(calls.iter().any(|c| c.starts_with("git commit -m")));
    assert_eq!(runner.count_of("git push"), 1);
}

#[test]
fn clean_tree_pushes_without_committing() {
    let runner = ScriptedRunner::new();
    let git = GitService::new(Arc::new(runner.clone()));

    assert!(git.push_to_remote(Path::new("/work/demo_project")));
    assert_eq!(runner.count_of("git commit"), 0);
    assert_eq!(runner.count_of("git push"), 1);
}

#[test]
fn push_retry_renames_the_branch_first() {
    // Every push fails; the orchestrator must rename and retry exactly once.
    let runner = ScriptedRunner::new()
        .respond("git push", CommandResult::failed("error: src refspec main"));
    let git = GitService::new(Arc::new(runner.clone()));

    assert!(!git.push_to_remote(Path::new("/work/demo_project")));
    assert_eq!(runner.count_of("git push"), 2);
    assert_eq!(runner.count_of("git branch -M main"), 1);
}

// ── Publishing ────────────────────────────────────────────────────────────────

#[test]
fn publish_happy_path_is_a_single_gh_create() {
    let runner = ScriptedRunner::new();
    let publish = PublishService::new(Arc::new(runner.clone()));

    let outcome = publish.publish(&spec(), Visibility::Public, None);
    assert_eq!(outcome, PublishOutcome::Created);
    assert_eq!(runner.count_of("gh repo create demo_project --public"), 1);
    assert_eq!(runner.count_of("git"), 0);
}

#[test]
fn publish_reattaches_when_the_repository_exists() {
    let runner = ScriptedRunner::new()
        .respond(
            "gh repo create",
            CommandResult::failed("Name already exists on this account"),
        )
        .respond("gh api user", CommandResult::ok("octocat\n"));
    let publish = PublishService::new(Arc::new(runner.clone()));

    let outcome = publish.publish(&spec(), Visibility::Public, None);
    assert_eq!(outcome, PublishOutcome::ReattachedExisting);
    assert_eq!(
        runner.count_of("git remote add origin git@github.com:octocat/demo_project.git"),
        1
    );
    assert_eq!(runner.count_of("git push"), 1);
}

#[test]
fn publish_does_not_reattach_on_unrelated_failures() {
    let runner = ScriptedRunner::new()
        .respond("gh repo create", CommandResult::failed("HTTP 502"));
    let publish = PublishService::new(Arc::new(runner.clone()));

    let outcome = publish.publish(&spec(), Visibility::Public, None);
    assert_eq!(outcome, PublishOutcome::Failed("HTTP 502".into()));
    assert_eq!(runner.count_of("git"), 0);
}

#[test]
fn publish_stops_when_gh_is_missing() {
    let runner = ScriptedRunner::new().respond(
        "gh --version",
        CommandResult::launch_failure("gh: No such file or directory"),
    );
    let publish = PublishService::new(Arc::new(runner.clone()));

    let outcome = publish.publish(&spec(), Visibility::Public, None);
    assert_eq!(outcome, PublishOutcome::ToolMissing);
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn publish_stops_when_unauthenticated() {
    let runner = ScriptedRunner::new().respond(
        "gh auth status",
        CommandResult::failed("You are not logged into any GitHub hosts."),
    );
    let publish = PublishService::new(Arc::new(runner.clone()));

    let outcome = publish.publish(&spec(), Visibility::Private, None);
    assert_eq!(outcome, PublishOutcome::NotAuthenticated);
    assert_eq!(runner.count_of("gh repo create"), 0);
}
