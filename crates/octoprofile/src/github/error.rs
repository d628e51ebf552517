//! GitHub API error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when calling the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Resource not found (unknown user, typically).
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Rate limit exceeded (403 with an exhausted quota, or 429).
    #[error("rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: DateTime<Utc> },

    /// Any other non-success response from the API.
    #[error("GitHub API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Network or connection error.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("failed to decode GitHub response: {message}")]
    Decode { message: String },
}

impl GitHubError {
    /// Create a not-found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a decode error.
    #[inline]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check if this error is a not-found error.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a rate limit error.
    #[inline]
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        let not_found = GitHubError::not_found("user alice");
        assert!(not_found.is_not_found());
        assert!(!not_found.is_rate_limited());

        let rate_limited = GitHubError::RateLimited {
            reset_at: Utc::now(),
        };
        assert!(rate_limited.is_rate_limited());
        assert!(!rate_limited.is_not_found());

        let api = GitHubError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!api.is_not_found());
        assert!(!api.is_rate_limited());
    }

    #[test]
    fn not_found_message_names_the_resource() {
        let err = GitHubError::not_found("user alice");
        assert_eq!(err.to_string(), "not found: user alice");
    }
}
