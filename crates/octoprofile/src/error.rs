//! Aggregation error type.

use thiserror::Error;

use crate::github::GitHubError;

/// Which upstream call failed during aggregation.
///
/// The two fetches run concurrently and fail independently; the stage lets
/// the HTTP boundary report a precise message for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The `GET /users/{username}` profile fetch.
    Profile,
    /// The paginated `GET /users/{username}/repos` listing.
    Repositories,
}

impl FetchStage {
    /// Human-readable description of the failed operation.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            FetchStage::Profile => "fetching GitHub profile",
            FetchStage::Repositories => "fetching GitHub repositories",
        }
    }
}

/// An upstream failure, tagged with the stage that produced it.
///
/// The underlying error is propagated without translation of meaning;
/// aggregation is all-or-nothing, so a single upstream failure is a single
/// aggregation failure.
#[derive(Debug, Error)]
#[error("{} failed: {source}", .stage.describe())]
pub struct AggregateError {
    /// The upstream call that failed.
    pub stage: FetchStage,
    /// The underlying GitHub client error.
    #[source]
    pub source: GitHubError,
}

impl AggregateError {
    /// Tag a GitHub client error with the stage it came from.
    #[must_use]
    pub fn new(stage: FetchStage, source: GitHubError) -> Self {
        Self { stage, source }
    }

    /// Check whether the underlying failure was an upstream not-found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }

    /// Check whether the underlying failure was an upstream rate limit.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.source.is_rate_limited()
    }
}
