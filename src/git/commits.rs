//! Commit extraction: walking recent history and normalizing each commit.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use git2::{Commit, ErrorCode, Repository, Sort};
use tracing::debug;

use crate::error::GitError;

use super::since::resolve_since;

/// Number of hex characters kept from the full commit id.
pub const HASH_PREFIX_LEN: usize = 7;

/// Consecutive commits older than the cutoff after which the walk stops.
///
/// The walk is time-sorted, so a long run of old commits means the window is
/// behind us. The slack tolerates a few skewed committer clocks.
pub const STALE_RUN_LIMIT: usize = 32;

/// Line and file counts of a commit against its first parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub insertions: usize,
    pub deletions: usize,
    pub files: usize,
}

/// A commit flattened into the fields the prompt needs.
///
/// Root commits carry empty `changed_files` and zeroed `stats`; their diff
/// against the empty tree is never computed.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub hash_prefix: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub timestamp: DateTime<FixedOffset>,
    pub changed_files: Vec<String>,
    pub stats: CommitStats,
}

impl CommitRecord {
    /// Create a CommitRecord from a git2 Commit.
    pub fn from_git2_commit(repo: &Repository, commit: &Commit<'_>) -> Result<Self, GitError> {
        let id = commit.id().to_string();
        let hash_prefix: String = id.chars().take(HASH_PREFIX_LEN).collect();

        let time = commit.time();
        let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
        let timestamp = DateTime::from_timestamp(time.seconds(), 0)
            .ok_or_else(|| GitError::InvalidTimestamp {
                hash: id.clone(),
                seconds: time.seconds(),
            })?
            .with_timezone(&offset);

        let author = commit.author();

        let (changed_files, stats) = if commit.parent_count() > 0 {
            first_parent_diff(repo, commit, &id)?
        } else {
            (Vec::new(), CommitStats::default())
        };

        Ok(Self {
            hash_prefix,
            message: String::from_utf8_lossy(commit.message_bytes()).trim().to_string(),
            author_name: String::from_utf8_lossy(author.name_bytes()).into_owned(),
            author_email: String::from_utf8_lossy(author.email_bytes()).into_owned(),
            timestamp,
            changed_files,
            stats,
        })
    }
}

/// Diff a commit against its first parent: changed paths in diff order plus totals.
fn first_parent_diff(
    repo: &Repository,
    commit: &Commit<'_>,
    id: &str,
) -> Result<(Vec<String>, CommitStats), GitError> {
    let diff_failed = |source| GitError::DiffFailed {
        hash: id.to_string(),
        source,
    };

    let parent = commit.parent(0).map_err(GitError::ParseCommit)?;
    let parent_tree = parent.tree().map_err(diff_failed)?;
    let tree = commit.tree().map_err(diff_failed)?;

    let diff = repo
        .diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)
        .map_err(diff_failed)?;

    let changed_files = diff
        .deltas()
        .filter_map(|delta| {
            delta
                .old_file()
                .path()
                .or_else(|| delta.new_file().path())
                .map(|p| p.to_string_lossy().into_owned())
        })
        .collect();

    let totals = diff.stats().map_err(diff_failed)?;
    let stats = CommitStats {
        insertions: totals.insertions(),
        deletions: totals.deletions(),
        files: totals.files_changed(),
    };

    Ok((changed_files, stats))
}

/// Case-insensitive substring match against the author's display name.
///
/// `needle` must already be lowercased.
fn author_matches(commit: &Commit<'_>, needle: &str) -> bool {
    String::from_utf8_lossy(commit.author().name_bytes())
        .to_lowercase()
        .contains(needle)
}

/// A repository opened for commit extraction.
pub struct CommitLog {
    repo: Repository,
}

impl CommitLog {
    /// Open the repository containing `path`, searching parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|source| GitError::NotARepository {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { repo })
    }

    /// The underlying git2 repository.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Fetch commits newer than the resolved `since` spec, newest first,
    /// optionally restricted to authors whose name contains `author`.
    pub fn get_commits(
        &self,
        since: &str,
        author: Option<&str>,
    ) -> Result<Vec<CommitRecord>, GitError> {
        let cutoff = resolve_since(since)?;
        self.commits_since(cutoff, author)
    }

    /// Fetch commits reachable from HEAD whose commit time is at or after `cutoff`.
    pub fn commits_since(
        &self,
        cutoff: DateTime<Local>,
        author: Option<&str>,
    ) -> Result<Vec<CommitRecord>, GitError> {
        debug!("Collecting commits since {}", cutoff.to_rfc3339());

        let mut revwalk = self.repo.revwalk().map_err(GitError::RevwalkError)?;
        // Sorting must be set before pushing: changing it resets the walker.
        revwalk.set_sorting(Sort::TIME).map_err(GitError::RevwalkError)?;

        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                debug!("HEAD has no commits yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(GitError::RevwalkError(e)),
        }

        let cutoff_secs = cutoff.timestamp();
        let needle = author.map(str::to_lowercase);

        let mut visited = 0usize;
        let mut stale_run = 0usize;
        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result.map_err(GitError::RevwalkError)?;
            let commit = self.repo.find_commit(oid).map_err(GitError::ParseCommit)?;
            visited += 1;

            if commit.time().seconds() < cutoff_secs {
                stale_run += 1;
                if stale_run >= STALE_RUN_LIMIT {
                    debug!("Stopping after {} commits older than the cutoff", stale_run);
                    break;
                }
                continue;
            }
            stale_run = 0;

            if let Some(needle) = needle.as_deref()
                && !author_matches(&commit, needle)
            {
                continue;
            }

            commits.push(CommitRecord::from_git2_commit(&self.repo, &commit)?);
        }

        debug!("Visited {} commits, kept {}", visited, commits.len());

        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Signature, Time};

    fn commit_file(repo: &Repository, sig: &Signature<'_>, path: &str, content: &str) -> git2::Oid {
        let workdir = repo.workdir().unwrap();
        std::fs::write(workdir.join(path), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), sig, sig, "change", &tree, &parents).unwrap()
    }

    #[test]
    fn test_record_keeps_seven_char_prefix_and_offset() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = Signature::new("Jane Doe", "jane@example.com", &Time::new(1_700_000_000, 120)).unwrap();
        let oid = commit_file(&repo, &sig, "a.txt", "a\n");

        let commit = repo.find_commit(oid).unwrap();
        let record = CommitRecord::from_git2_commit(&repo, &commit).unwrap();

        assert_eq!(record.hash_prefix, oid.to_string()[..7]);
        assert_eq!(record.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(record.timestamp.offset().local_minus_utc(), 7200);
        assert_eq!(record.author_name, "Jane Doe");
        assert_eq!(record.author_email, "jane@example.com");
    }

    #[test]
    fn test_child_commit_counts_lines() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let sig = Signature::now("Jane Doe", "jane@example.com").unwrap();
        commit_file(&repo, &sig, "a.txt", "one\n");
        let oid = commit_file(&repo, &sig, "a.txt", "one\ntwo\nthree\n");

        let commit = repo.find_commit(oid).unwrap();
        let record = CommitRecord::from_git2_commit(&repo, &commit).unwrap();

        assert_eq!(record.changed_files, vec!["a.txt".to_string()]);
        assert_eq!(
            record.stats,
            CommitStats {
                insertions: 2,
                deletions: 0,
                files: 1
            }
        );
    }

    #[test]
    fn test_unborn_head_yields_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        let log = CommitLog::open(dir.path()).unwrap();
        let commits = log.get_commits("today", None).unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = CommitLog::open(&missing).err().expect("expected an error");
        assert!(matches!(err, GitError::NotARepository { .. }));
    }
}
