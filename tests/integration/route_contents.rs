//! Integration tests for the contents route against the mock host

use super::test_utils::{blob, dir, MockHost};
use ghbook::cli::{Commands, RunContext};
use ghbook::config::GhbookConfig;
use ghbook::error::ApiError;

fn context_with_entries(entries: Vec<ghbook::tree::Entry>) -> RunContext {
    let config = GhbookConfig {
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    RunContext::with_host(config, Box::new(MockHost::with_entries(entries))).unwrap()
}

fn contents_command(
    file_types: Option<&str>,
    hide_dirs: bool,
    path: Option<&str>,
    format: &str,
) -> Commands {
    Commands::Contents {
        repo: "octocat/sandbox".to_string(),
        branch: None,
        path: path.map(|p| p.to_string()),
        file_types: file_types.map(|f| f.to_string()),
        hide_dirs,
        format: format.to_string(),
    }
}

#[test]
fn test_contents_text_output() {
    let context = context_with_entries(vec![blob("README.md"), dir("src"), blob("src/main.rs")]);
    let output = context
        .execute(&contents_command(None, false, None, "text"))
        .unwrap();

    assert!(output.contains("(root):"));
    assert!(output.contains("README.md"));
    assert!(output.contains("src:"));
    assert!(output.contains("main.rs"));
}

#[test]
fn test_contents_json_hides_dirs() {
    let context = context_with_entries(vec![dir("src"), blob("src/main.rs")]);
    let output = context
        .execute(&contents_command(None, true, None, "json"))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["src"]["files"][0], "main.rs");
    assert!(parsed["src"].get("dirs").is_none());
}

#[test]
fn test_contents_applies_extension_filter() {
    let context = context_with_entries(vec![blob("a.md"), blob("b.txt")]);
    let output = context
        .execute(&contents_command(Some(".md"), false, None, "json"))
        .unwrap();

    assert!(output.contains("a.md"));
    assert!(!output.contains("b.txt"));
}

#[test]
fn test_contents_base_path_restriction() {
    let context = context_with_entries(vec![
        blob("top.txt"),
        blob("src/main.rs"),
        blob("src/inner/util.rs"),
        blob("srcdir/other.rs"),
    ]);
    let output = context
        .execute(&contents_command(None, false, Some("src"), "json"))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.get("src").is_some());
    assert!(parsed.get("src/inner").is_some());
    assert!(parsed.get("").is_none());
    assert!(parsed.get("srcdir").is_none());
}

#[test]
fn test_contents_rejects_bad_repo_name() {
    let context = context_with_entries(vec![]);
    let command = Commands::Contents {
        repo: "not-a-repo".to_string(),
        branch: None,
        path: None,
        file_types: None,
        hide_dirs: false,
        format: "text".to_string(),
    };

    assert!(matches!(
        context.execute(&command),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_contents_rejects_empty_filter_token() {
    let context = context_with_entries(vec![blob("a.md")]);
    let result = context.execute(&contents_command(Some("md,,txt"), false, None, "text"));

    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_contents_unknown_branch_not_found() {
    let context = context_with_entries(vec![blob("a.md")]);
    let command = Commands::Contents {
        repo: "octocat/sandbox".to_string(),
        branch: Some("does-not-exist".to_string()),
        path: None,
        file_types: None,
        hide_dirs: false,
        format: "text".to_string(),
    };

    assert!(matches!(
        context.execute(&command),
        Err(ApiError::NotFound(_))
    ));
}

#[test]
fn test_add_users_route_fails_when_all_fail() {
    let config = GhbookConfig {
        token: Some("test-token".to_string()),
        ..Default::default()
    };
    let host = MockHost {
        failing_users: vec!["ghost".to_string()],
        ..Default::default()
    };
    let context = RunContext::with_host(config, Box::new(host)).unwrap();

    let command = Commands::AddUsers {
        repo: "octocat/sandbox".to_string(),
        permission: None,
        format: "text".to_string(),
        users: vec!["ghost".to_string()],
    };

    assert!(matches!(
        context.execute(&command),
        Err(ApiError::RequestFailed(_))
    ));
}

#[test]
fn test_repos_table_route() {
    let context = context_with_entries(vec![]);
    let output = context
        .execute(&Commands::Repos {
            format: "table".to_string(),
        })
        .unwrap();

    assert!(output.contains("octocat/sandbox"));
    assert!(output.contains("main"));
}
