//! Profile aggregation: compose the two upstream fetches and derive stats.

use chrono::Utc;

use crate::error::{AggregateError, FetchStage};
use crate::github::GitHubClient;
use crate::stats::compute_stats;
use crate::types::ProfileSummary;

/// Fetch a user's profile and repositories and build the aggregated summary.
///
/// The two upstream calls have no data dependency and run concurrently; the
/// first failure wins and the sibling future is dropped, cancelling its
/// in-flight request. Each failure is tagged with the stage it came from.
///
/// The caller validates that `username` is non-empty.
pub async fn summarize(
    client: &GitHubClient,
    username: &str,
) -> Result<ProfileSummary, AggregateError> {
    let (profile, repos) = tokio::try_join!(
        async {
            client
                .get_user(username)
                .await
                .map_err(|e| AggregateError::new(FetchStage::Profile, e))
        },
        async {
            client
                .list_repositories(username)
                .await
                .map_err(|e| AggregateError::new(FetchStage::Repositories, e))
        },
    )?;

    // Reference instant taken once, at the boundary of the pure calculator.
    let stats = compute_stats(&repos, profile.followers, profile.following, Utc::now());

    Ok(ProfileSummary::assemble(profile, &repos, stats))
}
