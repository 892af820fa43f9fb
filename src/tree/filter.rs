//! Filter options for directory map construction

use crate::error::ApiError;

/// Filtering applied while building the directory map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Allowed file extensions, without leading dot. Empty means no
    /// extension filtering.
    extensions: Vec<String>,
    /// Omit subdirectory listings from the output
    pub hide_dirs: bool,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw comma-separated extension list (e.g. `".md,.txt"` or
    /// `"md, txt"`). Tokens are trimmed and at most one leading dot is
    /// stripped. An empty token is rejected.
    pub fn with_raw_extensions(mut self, raw: &str) -> Result<Self, ApiError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(self);
        }

        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                return Err(ApiError::InvalidInput(
                    "File types cannot be empty".to_string(),
                ));
            }
            let ext = token.strip_prefix('.').unwrap_or(token);
            if ext.is_empty() {
                return Err(ApiError::InvalidInput(
                    "File types cannot be empty".to_string(),
                ));
            }
            self.extensions.push(ext.to_string());
        }

        Ok(self)
    }

    /// Use an already-parsed extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn hide_dirs(mut self, hide: bool) -> Self {
        self.hide_dirs = hide;
        self
    }

    pub fn has_extension_filter(&self) -> bool {
        !self.extensions.is_empty()
    }

    /// Whether a file base name passes the extension filter. With no
    /// filter configured everything passes. The extension is the
    /// substring after the last `.`; a name without one never matches a
    /// non-empty allow-list. Comparison is exact and case-sensitive.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match file_name.rsplit_once('.') {
            Some((_, ext)) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }
}
