//! Domain layer - pure business logic, no I/O.
//!
//! Everything in here is deterministic and unit-testable without adapters:
//! project-name validation, the embedded template data, the result shape of
//! external commands, and the classification of remote-creation failures.

pub mod command;
pub mod error;
pub mod project;
pub mod remote;
pub mod template;

pub use command::CommandResult;
pub use error::{DomainError, ErrorCategory};
pub use project::{GitIdentity, ProjectName, ProjectSpec, Visibility};
pub use remote::{RemoteFailure, classify_remote_error};
pub use template::{DIRECTORIES, TemplateFile};
