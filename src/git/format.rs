//! Rendering a commit batch as prompt text.

use super::commits::CommitRecord;
use super::context::infer_project_context;

/// Returned instead of an empty string when there is nothing to format.
pub const NO_COMMITS_TEXT: &str = "No commits found for the specified time range.";

/// Maximum changed paths listed per commit. Extra paths are dropped silently.
pub const MAX_LISTED_FILES: usize = 8;

/// Format commits into readable text for the model.
pub fn format_commits_for_ai(commits: &[CommitRecord]) -> String {
    if commits.is_empty() {
        return NO_COMMITS_TEXT.to_string();
    }

    let mut parts = Vec::new();

    let context = infer_project_context(commits);
    if !context.is_empty() {
        parts.push(format!(
            "PROJECT CONTEXT (inferred from files): {}\n",
            context.join(", ")
        ));
    }

    parts.push(format!("COMMITS ({} total):\n", commits.len()));

    for (i, commit) in commits.iter().enumerate() {
        parts.push(format!("\n{}. Commit: {}", i + 1, commit.message));
        parts.push(format!(
            "   Files changed: {} (+{} -{})",
            commit.stats.files, commit.stats.insertions, commit.stats.deletions
        ));

        if !commit.changed_files.is_empty() {
            let shown: Vec<&str> = commit
                .changed_files
                .iter()
                .take(MAX_LISTED_FILES)
                .map(String::as_str)
                .collect();
            parts.push(format!("   Modified: {}", shown.join(", ")));
        }
    }

    parts.join("\n")
}
