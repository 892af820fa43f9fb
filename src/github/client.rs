//! Reqwest-backed GitHub REST client

use crate::error::ApiError;
use crate::github::types::{BranchWire, RepoDetailWire, RepoWire, TreeResponse};
use crate::github::{RepoHost, RepoId, RepoSummary};
use crate::tree::Entry;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const REPOS_PER_PAGE: usize = 100;

/// GitHub REST v3 client
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String, base_url: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("ghbook/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::UpstreamError(format!("Failed to create HTTP client: {}", e)))?;
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(self.client.get(format!("{}{}", self.base_url, path)))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(self.client.put(format!("{}{}", self.base_url, path)))
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
    }
}

/// Map transport-level errors to the API error taxonomy
fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::RequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::UpstreamError(format!("HTTP error: {}", error))
    }
}

/// Map a non-success response to the API error taxonomy, consuming the
/// body for context. GitHub reports rate limiting as 403 as well as 429.
async fn check_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthFailed(format!("Bad credentials: {}", body)),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimited(format!("Forbidden or rate limited: {}", body))
        }
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        _ => ApiError::RequestFailed(format!("Request failed with status {}: {}", status, body)),
    })
}

#[async_trait]
impl RepoHost for GitHubClient {
    async fn list_repos(&self) -> Result<Vec<RepoSummary>, ApiError> {
        let mut repos = Vec::new();
        let mut page = 1usize;

        loop {
            let response = self
                .get("/user/repos")
                .query(&[("per_page", REPOS_PER_PAGE), ("page", page)])
                .send()
                .await
                .map_err(map_http_error)?;
            let response = check_response(response).await?;

            let batch: Vec<RepoWire> = response
                .json()
                .await
                .map_err(|e| ApiError::UpstreamError(format!("Failed to parse repos: {}", e)))?;
            let batch_len = batch.len();

            repos.extend(batch.into_iter().map(RepoWire::into_summary));

            if batch_len < REPOS_PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!(repo_count = repos.len(), "Listed repositories");
        Ok(repos)
    }

    async fn default_branch(&self, repo: &RepoId) -> Result<String, ApiError> {
        let response = self
            .get(&format!("/repos/{}/{}", repo.owner(), repo.repo()))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = check_response(response).await?;

        let detail: RepoDetailWire = response
            .json()
            .await
            .map_err(|e| ApiError::UpstreamError(format!("Failed to parse repository: {}", e)))?;

        Ok(detail.default_branch)
    }

    async fn branch_head(&self, repo: &RepoId, branch: &str) -> Result<String, ApiError> {
        let response = self
            .get(&format!(
                "/repos/{}/{}/branches/{}",
                repo.owner(),
                repo.repo(),
                branch
            ))
            .send()
            .await
            .map_err(map_http_error)?;
        let response = check_response(response).await?;

        let wire: BranchWire = response
            .json()
            .await
            .map_err(|e| ApiError::UpstreamError(format!("Failed to parse branch: {}", e)))?;

        Ok(wire.commit.sha)
    }

    async fn tree_entries(&self, repo: &RepoId, commit_sha: &str) -> Result<Vec<Entry>, ApiError> {
        let response = self
            .get(&format!(
                "/repos/{}/{}/git/trees/{}",
                repo.owner(),
                repo.repo(),
                commit_sha
            ))
            .query(&[("recursive", "1")])
            .send()
            .await
            .map_err(map_http_error)?;
        let response = check_response(response).await?;

        let tree: TreeResponse = response
            .json()
            .await
            .map_err(|e| ApiError::UpstreamError(format!("Failed to parse tree: {}", e)))?;

        if tree.truncated {
            warn!(
                repo = %repo,
                sha = %commit_sha,
                "Upstream tree listing was truncated; output may be incomplete"
            );
        }

        let entries: Vec<Entry> = tree
            .tree
            .into_iter()
            .filter_map(|item| item.into_entry())
            .collect();
        debug!(entry_count = entries.len(), "Fetched tree listing");

        Ok(entries)
    }

    async fn add_collaborator(
        &self,
        repo: &RepoId,
        username: &str,
        permission: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .put(&format!(
                "/repos/{}/{}/collaborators/{}",
                repo.owner(),
                repo.repo(),
                username
            ))
            .json(&json!({ "permission": permission }))
            .send()
            .await
            .map_err(map_http_error)?;

        // 201 = invitation created, 204 = already a collaborator
        check_response(response).await?;
        Ok(())
    }
}
