//! Error types for scribe modules using thiserror.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository: {}", path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Invalid since format: {0}")]
    InvalidTimeSpec(String),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to compute diff for commit {hash}: {source}")]
    DiffFailed {
        hash: String,
        #[source]
        source: git2::Error,
    },

    #[error("Commit {hash} has invalid timestamp (seconds={seconds})")]
    InvalidTimestamp { hash: String, seconds: i64 },
}

/// Errors from credential and provider configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{env_var} not found. Set it in .env or ~/.scriberc")]
    MissingCredential {
        provider: String,
        env_var: &'static str,
    },

    #[error("Unknown provider: {0}")]
    UnsupportedProvider(String),

    #[error("Failed to load {}: {source}", path.display())]
    DotfileFailed {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Transport and provider errors from the text-generation API.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("API returned no completion text")]
    EmptyResponse,
}

/// Which kind of draft a generation call was producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Tweets,
    Thread,
}

impl fmt::Display for DraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftKind::Tweets => f.write_str("tweets"),
            DraftKind::Thread => f.write_str("thread"),
        }
    }
}

/// Errors from draft generation.
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Error generating {kind}: {source}")]
    GenerationFailed {
        kind: DraftKind,
        #[source]
        source: OracleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_env_var() {
        let err = ConfigError::MissingCredential {
            provider: "deepseek".to_string(),
            env_var: "DEEPSEEK_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "DEEPSEEK_API_KEY not found. Set it in .env or ~/.scriberc"
        );
    }

    #[test]
    fn test_generation_failed_mentions_kind() {
        let err = DraftError::GenerationFailed {
            kind: DraftKind::Thread,
            source: OracleError::EmptyResponse,
        };
        assert_eq!(
            err.to_string(),
            "Error generating thread: API returned no completion text"
        );
    }

    #[test]
    fn test_invalid_time_spec_message() {
        let err = GitError::InvalidTimeSpec("last week".to_string());
        assert_eq!(err.to_string(), "Invalid since format: last week");
    }
}
