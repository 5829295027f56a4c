//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `genforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::CommandResult;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `genforge_adapters::filesystem::LocalFilesystem` (production)
/// - `genforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are success, not failure.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file verbatim, overwriting any existing file.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external commands to completion.
///
/// Implemented by:
/// - `genforge_adapters::process::ShellRunner` (production)
/// - `genforge_adapters::process::ScriptedRunner` (testing)
///
/// ## Contract
///
/// The runner blocks until the command exits and captures stdout/stderr as
/// text. It must **never** fail for a non-zero exit status — that is
/// reported through [`CommandResult::succeeded`] — and a process that cannot
/// even be launched is converted into a failed result whose stderr carries
/// the diagnostic. The runner knows nothing about the commands it runs.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, in `cwd` if given else the process's
    /// current directory.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> CommandResult;
}
