//! Scripted command runner for testing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use genforge_core::{application::ports::CommandRunner, domain::CommandResult};

/// Canned-response command runner for tests.
///
/// Responses are matched by prefix against `"program arg1 arg2 ..."`; the
/// first matching rule wins, and anything unmatched succeeds with empty
/// output. Every invocation is recorded for later inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedRunnerInner>>,
}

#[derive(Debug, Default)]
struct ScriptedRunnerInner {
    rules: Vec<(String, CommandResult)>,
    calls: Vec<String>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to any command line starting with `prefix`.
    pub fn respond(self, prefix: &str, result: CommandResult) -> Self {
        self.inner
            .lock()
            .unwrap()
            .rules
            .push((prefix.to_string(), result));
        self
    }

    /// Every recorded command line, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of recorded invocations starting with `prefix`.
    pub fn count_of(&self, prefix: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> CommandResult {
        let line = if args.is_empty() {
            program.to_string()
        } else {
            format!("{program} {}", args.join(" "))
        };

        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(line.clone());

        inner
            .rules
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, result)| result.clone())
            .unwrap_or_else(|| CommandResult::ok(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let runner = ScriptedRunner::new()
            .respond("git push", CommandResult::failed("rejected"))
            .respond("git", CommandResult::ok("fine"));

        assert!(!runner.run("git", &["push", "-u", "origin", "main"], None).succeeded);
        assert!(runner.run("git", &["init"], None).succeeded);
    }

    #[test]
    fn unmatched_commands_succeed_quietly() {
        let runner = ScriptedRunner::new();
        let result = runner.run("gh", &["--version"], None);
        assert!(result.succeeded);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn invocations_are_recorded_in_order() {
        let runner = ScriptedRunner::new();
        runner.run("git", &["init"], None);
        runner.run("git", &["add", "."], None);

        assert_eq!(runner.calls(), vec!["git init", "git add ."]);
        assert_eq!(runner.count_of("git"), 2);
    }
}
