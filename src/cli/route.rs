//! CLI route: single route table and run context. Dispatches to the
//! GitHub host and the tree core, returning formatted output.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_add_report_text, format_add_report_json, format_contents_json, format_contents_text,
    format_repos_json, format_repos_table,
};
use crate::collab;
use crate::config::{ConfigLoader, GhbookConfig};
use crate::error::ApiError;
use crate::github::{GitHubClient, RepoHost, RepoId};
use crate::tree::{self, DirMap, FilterOptions};
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: config, repository host, and the
/// async runtime driving it.
pub struct RunContext {
    config: GhbookConfig,
    host: Box<dyn RepoHost>,
    runtime: tokio::runtime::Runtime,
}

impl RunContext {
    /// Create run context from an optional config path and token
    /// override. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>, token: Option<String>) -> Result<Self, ApiError> {
        let mut config = ConfigLoader::load(config_path.as_deref())?;
        if let Some(token) = token {
            config.token = Some(token);
        }

        let api_token = config.require_token()?.to_string();
        let host = GitHubClient::new(api_token, Some(config.api_base_url.clone()))?;

        Self::with_host(config, Box::new(host))
    }

    /// Create run context around an existing host. Used by tests to
    /// substitute a mock for the network client.
    pub fn with_host(config: GhbookConfig, host: Box<dyn RepoHost>) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            ApiError::ConfigError(format!("Failed to create async runtime: {}", e))
        })?;

        Ok(Self {
            config,
            host,
            runtime,
        })
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Repos { format } => self.run_repos(format),
            Commands::Contents {
                repo,
                branch,
                path,
                file_types,
                hide_dirs,
                format,
            } => self.run_contents(
                repo,
                branch.as_deref(),
                path.as_deref(),
                file_types.as_deref(),
                *hide_dirs,
                format,
            ),
            Commands::AddUsers {
                repo,
                permission,
                format,
                users,
            } => self.run_add_users(repo, permission.as_deref(), users, format),
        }
    }

    fn run_repos(&self, format: &str) -> Result<String, ApiError> {
        let repos = self.runtime.block_on(self.host.list_repos())?;

        match format {
            "json" => format_repos_json(&repos),
            "table" => Ok(format_repos_table(&repos)),
            other => Err(ApiError::InvalidInput(format!(
                "Unknown format '{}' (expected 'table' or 'json')",
                other
            ))),
        }
    }

    fn run_contents(
        &self,
        repo: &str,
        branch: Option<&str>,
        base_path: Option<&str>,
        file_types: Option<&str>,
        hide_dirs: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        if format != "text" && format != "json" {
            return Err(ApiError::InvalidInput(format!(
                "Unknown format '{}' (expected 'text' or 'json')",
                format
            )));
        }

        let repo: RepoId = repo.parse()?;
        let mut options = FilterOptions::new().hide_dirs(hide_dirs);
        if let Some(raw) = file_types {
            options = options.with_raw_extensions(raw)?;
        }

        let entries = self.runtime.block_on(async {
            let branch = match branch {
                Some(branch) => branch.to_string(),
                None => self.host.default_branch(&repo).await?,
            };
            info!(repo = %repo, branch = %branch, "Fetching branch tree");
            let sha = self.host.branch_head(&repo, &branch).await?;
            self.host.tree_entries(&repo, &sha).await
        })?;

        let mut map = tree::build(&entries, &options);
        if let Some(prefix) = base_path {
            retain_under_base_path(&mut map, prefix);
        }

        match format {
            "json" => format_contents_json(&map),
            _ => Ok(format_contents_text(&map)),
        }
    }

    fn run_add_users(
        &self,
        repo: &str,
        permission: Option<&str>,
        users: &[String],
        format: &str,
    ) -> Result<String, ApiError> {
        if format != "text" && format != "json" {
            return Err(ApiError::InvalidInput(format!(
                "Unknown format '{}' (expected 'text' or 'json')",
                format
            )));
        }

        let repo: RepoId = repo.parse()?;
        let permission = permission.unwrap_or(&self.config.default_permission);

        let report = self
            .runtime
            .block_on(collab::add_users(self.host.as_ref(), &repo, users, permission))?;

        if report.all_failed() {
            return Err(ApiError::RequestFailed(format!(
                "All {} collaborator requests failed:\n{}",
                report.outcomes.len(),
                format_add_report_text(&report)
            )));
        }

        match format {
            "json" => format_add_report_json(&report),
            _ => Ok(format_add_report_text(&report)),
        }
    }
}

/// Restrict a built directory map to keys equal to or under the base
/// path. The tree core applies no base-path logic itself; this runs after
/// the build. An empty prefix keeps everything.
fn retain_under_base_path(map: &mut DirMap, base_path: &str) {
    let prefix = base_path.trim_matches('/');
    if prefix.is_empty() {
        return;
    }
    let nested = format!("{}/", prefix);
    map.retain(|key, _| key == prefix || key.starts_with(&nested));
}
