//! Genforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Genforge
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          genforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, GitService, Publish)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    genforge-adapters (Infrastructure)   │
//! │   (LocalFilesystem, ShellRunner, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectSpec, CommandResult, Template)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genforge_core::{
//!     application::ScaffoldService,
//!     domain::{ProjectName, ProjectSpec},
//! };
//!
//! // 1. Validate the project name and build a spec
//! let name = ProjectName::parse("my-ai-project")?;
//! let spec = ProjectSpec::in_current_dir(name)?;
//!
//! // 2. Use application services (with injected adapters)
//! let service = ScaffoldService::new(Box::new(filesystem));
//! let created = service.scaffold(&spec)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GitService, PublishOutcome, PublishService, ScaffoldService,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        CommandResult, GitIdentity, ProjectName, ProjectSpec, RemoteFailure, Visibility,
        classify_remote_error,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
