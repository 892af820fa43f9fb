//! CLI presentation: formatters from domain results to terminal output.

use crate::collab::AddReport;
use crate::error::ApiError;
use crate::github::RepoSummary;
use crate::tree::DirMap;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Label used for the root directory key in text output
const ROOT_LABEL: &str = "(root)";

pub fn format_contents_text(map: &DirMap) -> String {
    if map.is_empty() {
        return "No matching files found.".to_string();
    }

    let mut sections = Vec::with_capacity(map.len());
    for (path, node) in map {
        let label = if path.is_empty() { ROOT_LABEL } else { path };
        let mut s = format!("{}:", label);
        s.push_str(&format!("\n  files: {}", node.files.join(", ")));
        if let Some(dirs) = &node.dirs {
            if dirs.is_empty() {
                s.push_str("\n  dirs: (none)");
            } else {
                s.push_str(&format!("\n  dirs: {}", dirs.join(", ")));
            }
        }
        sections.push(s);
    }
    sections.join("\n")
}

pub fn format_contents_json(map: &DirMap) -> Result<String, ApiError> {
    serde_json::to_string_pretty(map)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to serialize output: {}", e)))
}

pub fn format_repos_table(repos: &[RepoSummary]) -> String {
    if repos.is_empty() {
        return "No repositories found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Repository", "Default branch"]);
    for repo in repos {
        table.add_row(vec![repo.name.as_str(), repo.default_branch.as_str()]);
    }
    table.to_string()
}

pub fn format_repos_json(repos: &[RepoSummary]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(repos)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to serialize output: {}", e)))
}

pub fn format_add_report_text(report: &AddReport) -> String {
    let mut lines = vec![format!(
        "Added collaborators to {} with permission '{}':",
        report.repo, report.permission
    )];
    for outcome in &report.outcomes {
        match &outcome.error {
            None => lines.push(format!("  {} {}", "ok".green(), outcome.username)),
            Some(error) => lines.push(format!(
                "  {} {}: {}",
                "failed".red(),
                outcome.username,
                error
            )),
        }
    }
    lines.push(format!(
        "{} added, {} failed",
        report.added(),
        report.failed()
    ));
    lines.join("\n")
}

pub fn format_add_report_json(report: &AddReport) -> Result<String, ApiError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ApiError::RequestFailed(format!("Failed to serialize output: {}", e)))
}
