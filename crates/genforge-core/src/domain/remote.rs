//! Classification of `gh repo create` failures.
//!
//! The create-vs-reattach decision hangs on substring matching of the gh
//! CLI's free-text error output, which is brittle by nature. The match is
//! isolated here behind a narrow function so it stays unit-testable and the
//! publish service only ever branches on [`RemoteFailure`].

/// Why a remote-repository creation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFailure {
    /// A repository with this name already exists on the host.
    /// Recoverable: attach the existing remote and push.
    AlreadyExists,
    /// The CLI is present but the user is not authenticated.
    AuthFailure,
    /// The hosting CLI itself could not be run.
    ToolMissing,
    /// Anything else. Terminal; the raw text is reported to the user.
    Other,
}

/// Classify the stderr text of a failed `gh repo create` invocation.
///
/// Matching is case-insensitive. Only [`RemoteFailure::AlreadyExists`] may
/// trigger the reattach fallback.
pub fn classify_remote_error(text: &str) -> RemoteFailure {
    let lower = text.to_lowercase();

    if lower.contains("already exists") {
        RemoteFailure::AlreadyExists
    } else if lower.contains("not logged in") || lower.contains("authentication") {
        RemoteFailure::AuthFailure
    } else if lower.contains("no such file") || lower.contains("not found") {
        RemoteFailure::ToolMissing
    } else {
        RemoteFailure::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_any_case() {
        for text in [
            "GraphQL: Name already exists on this account (createRepository)",
            "ALREADY EXISTS",
            "repository Already Exists",
        ] {
            assert_eq!(classify_remote_error(text), RemoteFailure::AlreadyExists);
        }
    }

    #[test]
    fn auth_failures_are_not_recoverable() {
        assert_eq!(
            classify_remote_error("You are not logged into any GitHub hosts."),
            RemoteFailure::AuthFailure
        );
        assert_eq!(
            classify_remote_error("HTTP 401: authentication required"),
            RemoteFailure::AuthFailure
        );
    }

    #[test]
    fn missing_tool_is_classified() {
        assert_eq!(
            classify_remote_error("gh: command not found"),
            RemoteFailure::ToolMissing
        );
    }

    #[test]
    fn unknown_text_is_other() {
        assert_eq!(
            classify_remote_error("HTTP 502: bad gateway"),
            RemoteFailure::Other
        );
        assert_eq!(classify_remote_error(""), RemoteFailure::Other);
    }

    #[test]
    fn already_exists_wins_over_other_markers() {
        // gh sometimes prints several lines; the recoverable marker decides.
        let text = "HTTP 422: Unprocessable Entity\nname already exists on this account";
        assert_eq!(classify_remote_error(text), RemoteFailure::AlreadyExists);
    }
}
