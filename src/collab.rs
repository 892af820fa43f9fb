//! Batch collaborator management
//!
//! Issues one authorization request per username concurrently and reports
//! the outcome per user. Partial success is a successful batch whose
//! report lists the failures; the whole call fails only on invalid input.

use crate::error::ApiError;
use crate::github::{RepoHost, RepoId};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Permission levels accepted by the collaborator API
pub const PERMISSION_LEVELS: &[&str] = &["pull", "triage", "push", "maintain", "admin"];

/// Outcome of a single collaborator-add request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserOutcome {
    pub username: String,
    /// Error text when the request failed; `None` on success
    pub error: Option<String>,
}

impl UserOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-item report for one batch of collaborator adds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddReport {
    pub repo: String,
    pub permission: String,
    pub outcomes: Vec<UserOutcome>,
}

impl AddReport {
    pub fn added(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.added()
    }

    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.added() == 0
    }
}

/// Add every username to the repository with the given permission level.
/// Requests run concurrently; outcomes keep the input order.
#[instrument(skip(host), fields(repo = %repo, user_count = users.len()))]
pub async fn add_users(
    host: &dyn RepoHost,
    repo: &RepoId,
    users: &[String],
    permission: &str,
) -> Result<AddReport, ApiError> {
    if users.is_empty() {
        return Err(ApiError::InvalidInput("No usernames provided".to_string()));
    }
    if !PERMISSION_LEVELS.contains(&permission) {
        return Err(ApiError::InvalidInput(format!(
            "Unknown permission level '{}' (expected one of: {})",
            permission,
            PERMISSION_LEVELS.join(", ")
        )));
    }

    let requests = users.iter().map(|username| async move {
        let result = host.add_collaborator(repo, username, permission).await;
        UserOutcome {
            username: username.clone(),
            error: result.err().map(|e| e.to_string()),
        }
    });

    let outcomes = join_all(requests).await;

    let report = AddReport {
        repo: repo.to_string(),
        permission: permission.to_string(),
        outcomes,
    };

    if report.failed() > 0 {
        warn!(
            added = report.added(),
            failed = report.failed(),
            "Collaborator batch completed with failures"
        );
    } else {
        info!(added = report.added(), "Collaborator batch completed");
    }

    Ok(report)
}
