//! Changed-file discovery for CI runs
//!
//! The gate only looks at files touched by the commit under test. Change
//! detection shells out to git; a failing invocation (not a repository, no
//! parent revision on the first commit) is logged and treated as an empty
//! change set so the gate never blocks on environment problems.

use std::process::Command;

/// List files changed between the current revision and its parent.
///
/// Returns paths in diff order. Any git failure yields an empty list.
pub fn changed_files() -> Vec<String> {
    let output = match Command::new("git")
        .args(["diff", "--name-only", "HEAD~1", "HEAD"])
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            log::error!("Error getting changed files: {}", e);
            return Vec::new();
        }
    };

    if !output.status.success() {
        log::error!(
            "Error getting changed files: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Vec::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep only SQL files, preserving input order.
///
/// Paths are trimmed of surrounding whitespace; the `.sql` suffix match is
/// case-sensitive.
pub fn sql_files(changed: &[String]) -> Vec<String> {
    changed
        .iter()
        .map(|file| file.trim())
        .filter(|file| file.ends_with(".sql"))
        .map(str::to_string)
        .collect()
}
