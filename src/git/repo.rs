// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::RawCommit;
use crate::error::{GitError, MsgCheckError, Result};
use git2::{Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            MsgCheckError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path (or any directory inside it).
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                MsgCheckError::Git(GitError::NotARepository)
            } else {
                MsgCheckError::Git(GitError::from(e))
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            MsgCheckError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            MsgCheckError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commits in `base..head`, oldest first.
    ///
    /// Without a base only the head commit itself is returned. Merge commits
    /// are skipped unless `include_merges` is set.
    pub fn commits_in_range(
        &self,
        base: Option<&str>,
        head: &str,
        include_merges: bool,
    ) -> Result<Vec<RawCommit>> {
        let head_commit = self.get_commit(head)?;

        let Some(base) = base else {
            if head_commit.parent_count() > 1 && !include_merges {
                tracing::debug!("Skipping merge commit {}", head_commit.id());
                return Ok(Vec::new());
            }
            return Ok(vec![to_raw_commit(&head_commit)]);
        };
        let base_commit = self.get_commit(base)?;

        let mut revwalk = self.inner.revwalk().map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(|e| command_failed("revwalk.set_sorting", e))?;
        revwalk
            .push(head_commit.id())
            .map_err(|e| command_failed("revwalk.push", e))?;
        revwalk
            .hide(base_commit.id())
            .map_err(|e| command_failed("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| command_failed("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                MsgCheckError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;

            if commit.parent_count() > 1 && !include_merges {
                tracing::debug!("Skipping merge commit {}", oid);
                continue;
            }
            commits.push(to_raw_commit(&commit));
        }

        tracing::debug!("Found {} commit(s) in {}..{}", commits.len(), base, head);
        Ok(commits)
    }
}

fn to_raw_commit(commit: &git2::Commit<'_>) -> RawCommit {
    RawCommit::new(
        commit.id().to_string(),
        String::from_utf8_lossy(commit.message_bytes()).into_owned(),
    )
}

fn command_failed(command: &str, err: git2::Error) -> MsgCheckError {
    MsgCheckError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: err.message().to_string(),
    })
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Fetch the commits of a range from the repository at `path` (or the
/// current directory).
pub fn fetch_range(
    path: Option<&Path>,
    base: Option<&str>,
    head: &str,
    include_merges: bool,
) -> Result<Vec<RawCommit>> {
    let repo = match path {
        Some(path) => Repository::open(path)?,
        None => open_repo()?,
    };
    repo.commits_in_range(base, head, include_merges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Oid, Signature};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        (dir, repo)
    }

    fn commit(repo: &Git2Repo, message: &str, parents: &[Oid]) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|oid| repo.find_commit(*oid).unwrap())
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(None, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(MsgCheckError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_range_oldest_first_excluding_base() {
        let (dir, repo) = create_test_repo();
        let base = commit(&repo, "Base\n\nBody", &[]);
        let first = commit(&repo, "First\n\nBody", &[base]);
        let second = commit(&repo, "Second\n\nBody", &[first]);

        let wrapper = Repository::open(dir.path()).unwrap();
        let commits = wrapper
            .commits_in_range(Some(&base.to_string()), &second.to_string(), false)
            .unwrap();

        let ids: Vec<_> = commits.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![first.to_string(), second.to_string()]);
        assert_eq!(commits[0].message, "First\n\nBody");
    }

    #[test]
    fn test_head_only() {
        let (dir, repo) = create_test_repo();
        let base = commit(&repo, "Base", &[]);
        let head = commit(&repo, "Head\n\nBody", &[base]);

        let commits = fetch_range(Some(dir.path()), None, &head.to_string(), false).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, head.to_string());
    }

    #[test]
    fn test_merges_skipped_unless_included() {
        let (dir, repo) = create_test_repo();
        let base = commit(&repo, "Base", &[]);
        let left = commit(&repo, "Left\n\nBody", &[base]);
        let right = commit(&repo, "Right\n\nBody", &[base]);
        let merge = commit(&repo, "Merge branch 'right'", &[left, right]);

        let wrapper = Repository::open(dir.path()).unwrap();
        let base_ref = base.to_string();
        let merge_ref = merge.to_string();

        let without = wrapper
            .commits_in_range(Some(&base_ref), &merge_ref, false)
            .unwrap();
        assert_eq!(without.len(), 2);
        assert!(without.iter().all(|c| c.id != merge_ref));

        let with = wrapper
            .commits_in_range(Some(&base_ref), &merge_ref, true)
            .unwrap();
        assert_eq!(with.len(), 3);
        assert_eq!(with.last().unwrap().id, merge_ref);
    }

    #[test]
    fn test_empty_range() {
        let (dir, repo) = create_test_repo();
        let head = commit(&repo, "Only", &[]);

        let wrapper = Repository::open(dir.path()).unwrap();
        let head_ref = head.to_string();
        let commits = wrapper
            .commits_in_range(Some(&head_ref), &head_ref, false)
            .unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_invalid_reference() {
        let (dir, repo) = create_test_repo();
        commit(&repo, "Only", &[]);

        let wrapper = Repository::open(dir.path()).unwrap();
        let result = wrapper.commits_in_range(None, "does-not-exist", false);
        assert!(matches!(
            result,
            Err(MsgCheckError::Git(GitError::InvalidReference { .. }))
        ));
    }
}
