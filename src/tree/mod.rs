//! Repository Directory Map
//!
//! Rebuilds a hierarchical directory structure from the flat entry list
//! returned by a Git-tree listing, keyed by directory path. Directories
//! survive only as file containers: a directory with no files after
//! filtering is pruned even when it has subdirectories.

pub mod builder;
pub mod filter;

pub use builder::build;
pub use filter::FilterOptions;

use serde::Serialize;
use std::collections::BTreeMap;

/// Kind of a flat tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory marker
    Tree,
}

/// A single flat entry from a recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Slash-separated path relative to the repository root, non-empty
    pub path: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Contents of one surviving directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirNode {
    /// Base names of files directly inside this directory
    pub files: Vec<String>,
    /// Base names of immediate subdirectories; omitted when directories
    /// are hidden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<String>>,
}

/// Directory path → contents. The root directory is keyed by `""`.
///
/// A BTreeMap keeps key order deterministic across runs so serialized
/// output is stable.
pub type DirMap = BTreeMap<String, DirNode>;
