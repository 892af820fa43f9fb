//! GitHub API Integration
//!
//! Async client for the GitHub REST v3 API behind a `RepoHost` trait so
//! the routing layer can run against a mock in tests. Covers repository
//! listing, branch resolution, recursive tree fetching, and collaborator
//! management.

use crate::error::ApiError;
use crate::tree::Entry;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{RepoSummary, TreeItem};

/// An `owner/repo` repository identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    owner: String,
    repo: String,
}

impl RepoId {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl FromStr for RepoId {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ApiError::InvalidInput(format!(
                "Invalid repository name: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Repository host abstraction
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// List repositories visible to the authenticated user.
    async fn list_repos(&self) -> Result<Vec<RepoSummary>, ApiError>;

    /// Resolve the repository's default branch name.
    async fn default_branch(&self, repo: &RepoId) -> Result<String, ApiError>;

    /// Resolve a branch name to its head commit SHA.
    async fn branch_head(&self, repo: &RepoId, branch: &str) -> Result<String, ApiError>;

    /// Fetch the full recursive tree listing for a commit as flat entries.
    /// Malformed or unsupported items (e.g. submodules) are dropped.
    async fn tree_entries(&self, repo: &RepoId, commit_sha: &str) -> Result<Vec<Entry>, ApiError>;

    /// Add one collaborator with the given permission level.
    async fn add_collaborator(
        &self,
        repo: &RepoId,
        username: &str,
        permission: &str,
    ) -> Result<(), ApiError>;
}
