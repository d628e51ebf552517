//! GitHub REST API client.
//!
//! Two read-only operations back the aggregator: a user lookup and a
//! paginated repository listing. Failures are typed so the boundary layer
//! can distinguish not-found, rate-limit, and transport errors.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_API_ROOT, DEFAULT_PAGE_SIZE, GitHubClient, GitHubClientConfig};
pub use error::GitHubError;
