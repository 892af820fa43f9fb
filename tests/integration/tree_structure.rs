//! Integration tests for directory map structure and pruning

use super::test_utils::{blob, dir};
use ghbook::tree::{build, DirNode, FilterOptions};

#[test]
fn test_empty_entries_yield_empty_map() {
    let map = build(&[], &FilterOptions::new());
    assert!(map.is_empty());

    let map = build(&[], &FilterOptions::new().hide_dirs(true));
    assert!(map.is_empty());
}

#[test]
fn test_root_file() {
    let map = build(&[blob("a.txt")], &FilterOptions::new());

    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get(""),
        Some(&DirNode {
            files: vec!["a.txt".to_string()],
            dirs: Some(vec![]),
        })
    );
}

#[test]
fn test_nested_grouping_with_pruned_root() {
    let entries = vec![blob("src/a.ts"), blob("src/b.ts"), dir("src")];

    let visible = build(&entries, &FilterOptions::new());
    assert_eq!(visible.len(), 1);
    assert_eq!(
        visible.get("src"),
        Some(&DirNode {
            files: vec!["a.ts".to_string(), "b.ts".to_string()],
            dirs: Some(vec![]),
        })
    );

    let hidden = build(&entries, &FilterOptions::new().hide_dirs(true));
    assert_eq!(
        hidden.get("src"),
        Some(&DirNode {
            files: vec!["a.ts".to_string(), "b.ts".to_string()],
            dirs: None,
        })
    );
}

#[test]
fn test_directory_markers_key_their_parent() {
    let entries = vec![dir("a"), dir("a/b"), blob("a/x.txt"), blob("top.txt")];
    let map = build(&entries, &FilterOptions::new());

    let root = map.get("").unwrap();
    assert_eq!(root.files, vec!["top.txt"]);
    assert_eq!(root.dirs, Some(vec!["a".to_string()]));

    let a = map.get("a").unwrap();
    assert_eq!(a.files, vec!["x.txt"]);
    assert_eq!(a.dirs, Some(vec!["b".to_string()]));

    // "a/b" owns no files, so it never becomes a key.
    assert!(!map.contains_key("a/b"));
}

#[test]
fn test_structural_directories_are_pruned() {
    // Directory chains without files disappear entirely, even when their
    // subdirectories are non-empty.
    let entries = vec![
        dir("docs"),
        dir("docs/guides"),
        blob("docs/guides/intro.md"),
    ];
    let map = build(&entries, &FilterOptions::new());

    assert_eq!(map.len(), 1);
    assert!(map.contains_key("docs/guides"));
    assert!(!map.contains_key("docs"));
    assert!(!map.contains_key(""));
}

#[test]
fn test_mixed_repo_shape() {
    let entries = vec![
        blob("README.md"),
        dir("src"),
        blob("src/main.rs"),
        dir("src/bin"),
        blob("src/bin/tool.rs"),
        dir("assets"),
    ];
    let map = build(&entries, &FilterOptions::new());

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("").unwrap().files, vec!["README.md"]);
    assert_eq!(
        map.get("").unwrap().dirs,
        Some(vec!["src".to_string(), "assets".to_string()])
    );
    assert_eq!(map.get("src").unwrap().files, vec!["main.rs"]);
    assert_eq!(map.get("src/bin").unwrap().files, vec!["tool.rs"]);
    // "assets" has no files: pruned, though still listed under root dirs.
    assert!(!map.contains_key("assets"));
}
