//! Wire types for the GitHub REST API

use crate::tree::{Entry, EntryKind};
use serde::{Deserialize, Serialize};

/// Repository as presented to the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    /// Full `owner/repo` name
    pub name: String,
    pub default_branch: String,
}

/// Item of a `GET /user/repos` page
#[derive(Debug, Clone, Deserialize)]
pub struct RepoWire {
    pub name: String,
    pub owner: OwnerWire,
    pub default_branch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerWire {
    pub login: String,
}

impl RepoWire {
    pub fn into_summary(self) -> RepoSummary {
        RepoSummary {
            name: format!("{}/{}", self.owner.login, self.name),
            default_branch: self.default_branch,
        }
    }
}

/// `GET /repos/{owner}/{repo}` — only the default branch is used
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDetailWire {
    pub default_branch: String,
}

/// `GET /repos/{owner}/{repo}/branches/{branch}`
#[derive(Debug, Clone, Deserialize)]
pub struct BranchWire {
    pub commit: CommitWire,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitWire {
    pub sha: String,
}

/// `GET /repos/{owner}/{repo}/git/trees/{sha}?recursive=1`
#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    pub sha: String,
    pub tree: Vec<TreeItem>,
    #[serde(default)]
    pub truncated: bool,
}

/// One item of a recursive tree listing. Path and type can be absent or
/// unrecognized upstream, so both are optional here and checked during
/// conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeItem {
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TreeItem {
    /// Convert a wire item into a flat entry. Items with a missing path
    /// or an unsupported kind (e.g. `commit` for submodules) yield `None`
    /// and are silently dropped by the caller.
    pub fn into_entry(self) -> Option<Entry> {
        let path = self.path?;
        let kind = match self.kind?.as_str() {
            "blob" => EntryKind::Blob,
            "tree" => EntryKind::Tree,
            _ => return None,
        };
        Some(Entry::new(path, kind))
    }
}
