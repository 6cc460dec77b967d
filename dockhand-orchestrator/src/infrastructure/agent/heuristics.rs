//! Heuristics over agent output
//!
//! The agent answers in prose, so branch names and PR URLs have to be
//! recovered from free text. Each heuristic has a documented fallback.

use std::sync::LazyLock;

use regex::Regex;

static PR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/[^/]+/[^/]+/pull/\d+").expect("PR URL pattern is valid")
});

/// Best-effort default branch detection from agent output.
///
/// Substring match against "main"/"master"; anything ambiguous resolves to
/// "main".
pub fn branch_from_agent_output(output: &str) -> &'static str {
    let lowered = output.to_lowercase();
    if lowered.contains("main") {
        "main"
    } else if lowered.contains("master") {
        "master"
    } else {
        "main"
    }
}

/// The first pull-request URL mentioned in agent output, if any.
pub fn extract_pull_request_url(output: &str) -> Option<String> {
    PR_URL.find(output).map(|m| m.as_str().to_string())
}
