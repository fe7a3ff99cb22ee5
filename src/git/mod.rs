//! Commit extraction using git2-rs.

pub mod commits;
pub mod context;
pub mod format;
pub mod since;

pub use commits::{CommitLog, CommitRecord, CommitStats};
pub use context::infer_project_context;
pub use format::format_commits_for_ai;
pub use since::{resolve_since, resolve_since_at};
