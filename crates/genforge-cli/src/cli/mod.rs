//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "genforge",
    bin_name = "genforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generative AI project scaffolding",
    long_about = "GenForge creates a ready-to-develop generative AI project: \
                  a fixed directory template, a local Git repository with an \
                  initial commit, and optionally a GitHub repository.",
    after_help = "EXAMPLES:\n\
        \x20 genforge new my-rag-app\n\
        \x20 genforge new my-rag-app --private --yes\n\
        \x20 genforge new offline-demo --skip-github\n\
        \x20 genforge completions bash > /usr/share/bash-completion/completions/genforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new generative AI project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 genforge new                       # prompts for a name\n\
            \x20 genforge new my-rag-app --yes\n\
            \x20 genforge new my-rag-app --private\n\
            \x20 genforge new my-rag-app --skip-git"
    )]
    New(NewArgs),

    /// Initialise a GenForge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 genforge init\n\
            \x20 genforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 genforge completions bash > ~/.local/share/bash-completion/completions/genforge\n\
            \x20 genforge completions zsh  > ~/.zfunc/_genforge\n\
            \x20 genforge completions fish > ~/.config/fish/completions/genforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `genforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted if omitted)")]
    pub name: Option<String>,

    /// Create the GitHub repository as public.
    #[arg(long = "public", help = "Create a public GitHub repository")]
    pub public: bool,

    /// Create the GitHub repository as private.
    #[arg(
        long = "private",
        conflicts_with = "public",
        help = "Create a private GitHub repository"
    )]
    pub private: bool,

    /// Skip all prompts, accepting defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts and accept defaults"
    )]
    pub yes: bool,

    /// Scaffold only; no git repository.
    #[arg(
        long = "skip-git",
        help = "Do not initialise a Git repository (implies --skip-github)"
    )]
    pub skip_git: bool,

    /// Keep the project local; no GitHub repository.
    #[arg(long = "skip-github", help = "Do not create a GitHub repository")]
    pub skip_github: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `genforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `genforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
