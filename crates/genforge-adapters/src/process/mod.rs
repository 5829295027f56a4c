//! Process execution adapters.

mod script;
mod shell;

pub use script::ScriptedRunner;
pub use shell::ShellRunner;
