//! Deployment-relative base path for API calls.

use crate::error::SearchError;

/// Base path the application is mounted under (e.g. `/hesabpak`).
///
/// Resolved once from configuration and passed to whatever builds request
/// URLs. The stored prefix is either empty or starts with `/` and has no
/// trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiBase {
    prefix: String,
}

impl ApiBase {
    /// Normalises and validates a prefix. `""`, `"/"` and `"hesabpak/"` are
    /// all accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPrefix`] if the prefix contains
    /// whitespace, `?`, `#`, `\` or empty path segments.
    pub fn new(prefix: &str) -> Result<Self, SearchError> {
        let trimmed = prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        let invalid = trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '#' | '\\'))
            || trimmed.split('/').any(str::is_empty);
        if invalid {
            return Err(SearchError::InvalidPrefix {
                prefix: prefix.to_string(),
            });
        }
        Ok(Self {
            prefix: format!("/{trimmed}"),
        })
    }

    /// An application mounted at the server root.
    pub fn root() -> Self {
        Self::default()
    }

    /// The normalised prefix (empty for the root).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Absolute path of an endpoint below the prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }
}
