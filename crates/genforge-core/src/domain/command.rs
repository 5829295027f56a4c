//! The result shape of every external command invocation.

/// Outcome of one external command, captured to completion.
///
/// External command failures are never surfaced as `Err` anywhere in this
/// crate: a non-zero exit or a failed spawn both land here with
/// `succeeded == false`, and each call site decides its own policy
/// (terminal, fallback, or log-and-continue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// A successful invocation with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A non-zero exit with the given stderr.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// A process that could not even be launched (e.g. binary not on PATH).
    /// The diagnostic goes to stderr so callers can report it.
    pub fn launch_failure(diagnostic: impl Into<String>) -> Self {
        Self::failed(diagnostic)
    }

    /// `true` if the command produced any non-whitespace stdout.
    pub fn has_output(&self) -> bool {
        !self.stdout.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_sets_succeeded() {
        let r = CommandResult::ok("hello");
        assert!(r.succeeded);
        assert_eq!(r.stdout, "hello");
        assert!(r.stderr.is_empty());
    }

    #[test]
    fn failed_carries_stderr() {
        let r = CommandResult::failed("boom");
        assert!(!r.succeeded);
        assert_eq!(r.stderr, "boom");
    }

    #[test]
    fn whitespace_only_stdout_is_not_output() {
        assert!(!CommandResult::ok("  \n ").has_output());
        assert!(CommandResult::ok(" M src/main.py\n").has_output());
    }
}
