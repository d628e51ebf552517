//! Octoprofile - GitHub profile aggregation.
//!
//! This library fetches a GitHub user's profile and owned repositories,
//! reduces them to a single flat summary, and derives simple statistics
//! (star totals, active-repo counts, top language, follower ratio).
//!
//! # Example
//!
//! ```ignore
//! use octoprofile::{GitHubClient, GitHubClientConfig, summarize};
//!
//! let client = GitHubClient::new(GitHubClientConfig::default())?;
//! let summary = summarize(&client, "alice").await?;
//! println!("{} owns {} repositories", summary.login, summary.repositories.len());
//! ```

pub mod aggregate;
pub mod error;
pub mod github;
pub mod stats;
pub mod types;

pub use aggregate::summarize;
pub use error::{AggregateError, FetchStage};
pub use github::{GitHubClient, GitHubClientConfig, GitHubError};
pub use stats::{ACTIVE_WINDOW_DAYS, compute_stats};
pub use types::{ProfileSummary, RepoStats, RepositoryEntry, RepositorySummary, UserProfile};
