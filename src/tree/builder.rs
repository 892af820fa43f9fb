//! Directory map builder
//!
//! Three pure stages over the flat entry list: group entries under their
//! parent directory, prune directories left without files, then project
//! the accumulators into output nodes.

use crate::tree::{DirMap, DirNode, Entry, EntryKind, FilterOptions};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Mutable per-directory accumulator used during grouping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DirAccumulator {
    pub(crate) files: Vec<String>,
    pub(crate) dirs: Vec<String>,
}

/// Build the filtered directory map from a flat entry list.
///
/// Pure and deterministic: no I/O, inputs are not mutated, and equal
/// inputs yield structurally equal maps. Malformed entries are skipped,
/// never surfaced as errors; an empty or fully filtered input produces an
/// empty map.
#[instrument(skip_all, fields(entry_count = entries.len()))]
pub fn build(entries: &[Entry], options: &FilterOptions) -> DirMap {
    let grouped = group(entries, options);
    debug!(directory_count = grouped.len(), "Grouped entries");

    let pruned = prune(grouped);
    debug!(directory_count = pruned.len(), "Pruned empty directories");

    project(pruned, options.hide_dirs)
}

/// Split a path into its parent directory key and base name.
///
/// A single-segment path belongs to the root key `""`. Paths that are
/// empty or end in a separator have no usable base name and are treated
/// as malformed.
fn split_parent(path: &str) -> Option<(&str, &str)> {
    let (parent, base) = match path.rsplit_once('/') {
        Some((parent, base)) => (parent, base),
        None => ("", path),
    };
    if base.is_empty() {
        return None;
    }
    Some((parent, base))
}

/// Stage 1: group entries under their parent directory key, applying the
/// extension filter to files. Directory names are always recorded,
/// independent of `hide_dirs`; the projection stage decides whether they
/// are emitted.
fn group(entries: &[Entry], options: &FilterOptions) -> BTreeMap<String, DirAccumulator> {
    let mut accumulators: BTreeMap<String, DirAccumulator> = BTreeMap::new();

    for entry in entries {
        let Some((parent, base)) = split_parent(&entry.path) else {
            trace!(path = %entry.path, "Skipping malformed entry");
            continue;
        };

        match entry.kind {
            EntryKind::Blob => {
                if !options.matches(base) {
                    trace!(path = %entry.path, "Filtered out by extension");
                    continue;
                }
                accumulators
                    .entry(parent.to_string())
                    .or_default()
                    .files
                    .push(base.to_string());
            }
            EntryKind::Tree => {
                accumulators
                    .entry(parent.to_string())
                    .or_default()
                    .dirs
                    .push(base.to_string());
            }
        }
    }

    accumulators
}

/// Stage 2: drop every directory whose file list is empty. Directories
/// are significant only as file containers, so a directory holding
/// nothing but subdirectories is removed as well.
fn prune(mut accumulators: BTreeMap<String, DirAccumulator>) -> BTreeMap<String, DirAccumulator> {
    accumulators.retain(|_, acc| !acc.files.is_empty());
    accumulators
}

/// Stage 3: convert surviving accumulators into output nodes, dropping
/// the subdirectory listings when directories are hidden.
fn project(accumulators: BTreeMap<String, DirAccumulator>, hide_dirs: bool) -> DirMap {
    accumulators
        .into_iter()
        .map(|(path, acc)| {
            let node = DirNode {
                files: acc.files,
                dirs: if hide_dirs { None } else { Some(acc.dirs) },
            };
            (path, node)
        })
        .collect()
}
