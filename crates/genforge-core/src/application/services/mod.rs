//! Application services - one per use case.

pub mod git_service;
pub mod publish_service;
pub mod scaffold_service;

pub use git_service::{GitService, INITIAL_COMMIT_MESSAGE};
pub use publish_service::{PublishOutcome, PublishService, web_url};
pub use scaffold_service::ScaffoldService;
