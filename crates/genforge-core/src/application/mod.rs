//! Application layer - use-case orchestration over the driven ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    GitService, INITIAL_COMMIT_MESSAGE, PublishOutcome, PublishService, ScaffoldService, web_url,
};
