//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature, Time};

pub const DEFAULT_AUTHOR: &str = "Test User";
pub const DEFAULT_EMAIL: &str = "test@example.com";

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a commit touching `test.txt`, authored now by the default user.
    pub fn commit(&self, message: &str) -> Oid {
        let content = format!("{}\n{}", message, unique_suffix());
        self.commit_files(message, &[("test.txt", &content)])
    }

    /// Create a commit writing each `(path, content)` pair, authored now.
    pub fn commit_files(&self, message: &str, files: &[(&str, &str)]) -> Oid {
        let sig = Signature::now(DEFAULT_AUTHOR, DEFAULT_EMAIL).expect("Failed to create signature");
        self.commit_with(&sig, message, files)
    }

    /// Create a commit authored by `name` <`email`>, now.
    pub fn commit_as(&self, name: &str, email: &str, message: &str) -> Oid {
        let sig = Signature::now(name, email).expect("Failed to create signature");
        let content = format!("{}\n{}", message, unique_suffix());
        self.commit_with(&sig, message, &[("test.txt", &content)])
    }

    /// Create a commit dated `seconds` since the epoch (author and committer).
    pub fn commit_at(&self, message: &str, seconds: i64) -> Oid {
        let sig = Signature::new(DEFAULT_AUTHOR, DEFAULT_EMAIL, &Time::new(seconds, 0))
            .expect("Failed to create signature");
        let content = format!("{}\n{}", message, unique_suffix());
        self.commit_with(&sig, message, &[("test.txt", &content)])
    }

    /// Write files, stage them and commit on top of HEAD (if any).
    pub fn commit_with(&self, sig: &Signature<'_>, message: &str, files: &[(&str, &str)]) -> Oid {
        let tree = self.stage(files);

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), sig, sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit on top of `parent` without moving HEAD (a side branch).
    pub fn commit_on(&self, parent: Oid, message: &str, files: &[(&str, &str)]) -> Oid {
        let sig = Signature::now(DEFAULT_AUTHOR, DEFAULT_EMAIL).expect("Failed to create signature");
        let parent = self.repo.find_commit(parent).expect("Failed to find parent");
        let tree = self.stage(files);

        self.repo
            .commit(None, &sig, &sig, message, &tree, &[&parent])
            .expect("Failed to create commit")
    }

    /// Write files into the working tree and index, returning the index tree.
    fn stage(&self, files: &[(&str, &str)]) -> git2::Tree<'_> {
        let mut index = self.repo.index().expect("Failed to get index");

        for (path, content) in files {
            let full_path = self.dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&full_path, content).expect("Failed to write test file");
            index.add_path(Path::new(path)).expect("Failed to add file");
        }

        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        self.repo.find_tree(tree_id).expect("Failed to find tree")
    }

    /// Create a merge commit on HEAD with `first` and `second` as parents,
    /// using the tree of `second`.
    pub fn merge_commit(&self, message: &str, first: Oid, second: Oid) -> Oid {
        let sig = Signature::now(DEFAULT_AUTHOR, DEFAULT_EMAIL).expect("Failed to create signature");
        let first = self.repo.find_commit(first).expect("Failed to find first parent");
        let second = self.repo.find_commit(second).expect("Failed to find second parent");
        let tree = second.tree().expect("Failed to find tree");

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&first, &second])
            .expect("Failed to create merge commit")
    }
}

fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}
