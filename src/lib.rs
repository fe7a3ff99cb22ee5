//! scribe - A CLI tool that turns recent git commits into build-in-public posts.
//!
//! # Overview
//!
//! scribe walks the commits of a local repository within a time window,
//! formats them as prompt text, asks an OpenAI-compatible chat API (DeepSeek
//! or OpenAI) for post drafts, and splits the reply into candidates.

pub mod config;
pub mod draft;
pub mod error;
pub mod git;
pub mod llm;
pub mod spinner;

// Re-export commonly used types
pub use config::Config;
pub use draft::{DraftGenerator, Style, parse_drafts};
pub use error::{ConfigError, DraftError, DraftKind, GitError, OracleError};
pub use git::{CommitLog, CommitRecord, CommitStats, format_commits_for_ai};
pub use llm::{ChatClient, CompletionRequest, Oracle, Provider};
