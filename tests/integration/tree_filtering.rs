//! Integration tests for extension filtering behavior

use super::test_utils::{blob, dir};
use ghbook::tree::{build, FilterOptions};

#[test]
fn test_extension_filter_keeps_only_matches() {
    let entries = vec![blob("x.md"), blob("y.txt")];
    let options = FilterOptions::new().with_extensions(["md"]);
    let map = build(&entries, &options);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("").unwrap().files, vec!["x.md"]);
}

#[test]
fn test_all_filtered_out_yields_empty_map() {
    let entries = vec![blob("x.md"), blob("y.txt")];
    let options = FilterOptions::new().with_extensions(["png"]);
    let map = build(&entries, &options);

    assert!(map.is_empty());
}

#[test]
fn test_no_extension_never_matches_active_filter() {
    let entries = vec![blob("Makefile")];
    let options = FilterOptions::new().with_extensions(["md"]);
    assert!(build(&entries, &options).is_empty());

    // Without a filter the same file is kept.
    let map = build(&entries, &FilterOptions::new());
    assert_eq!(map.get("").unwrap().files, vec!["Makefile"]);
}

#[test]
fn test_filter_prunes_directories_left_empty() {
    let entries = vec![
        dir("src"),
        blob("src/app.ts"),
        blob("src/notes.md"),
        dir("docs"),
        blob("docs/guide.md"),
    ];
    let options = FilterOptions::new().with_extensions(["ts"]);
    let map = build(&entries, &options);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("src").unwrap().files, vec!["app.ts"]);
    assert!(!map.contains_key("docs"));
}

#[test]
fn test_raw_comma_separated_filter() {
    let entries = vec![blob("a.md"), blob("b.txt"), blob("c.rs")];
    let options = FilterOptions::new()
        .with_raw_extensions(".md, txt")
        .unwrap();
    let map = build(&entries, &options);

    assert_eq!(map.get("").unwrap().files, vec!["a.md", "b.txt"]);
}

#[test]
fn test_filter_is_case_sensitive() {
    let entries = vec![blob("a.md"), blob("b.MD")];
    let options = FilterOptions::new().with_extensions(["md"]);
    let map = build(&entries, &options);

    assert_eq!(map.get("").unwrap().files, vec!["a.md"]);
}

#[test]
fn test_dir_names_unaffected_by_extension_filter() {
    // Directory listings come from tree markers, not from surviving
    // files, so filtering files does not touch them.
    let entries = vec![dir("src"), blob("keep.md"), blob("src/drop.txt")];
    let options = FilterOptions::new().with_extensions(["md"]);
    let map = build(&entries, &options);

    let root = map.get("").unwrap();
    assert_eq!(root.files, vec!["keep.md"]);
    assert_eq!(root.dirs, Some(vec!["src".to_string()]));
    assert!(!map.contains_key("src"));
}
