//! Repository statistics calculator.
//!
//! A single pass over the repository list, accumulating totals and counts.
//! The reference instant for the active-repo window is an explicit parameter
//! so the function stays pure and deterministic under test.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::types::{RepoStats, RepositorySummary};

/// A repository counts as active when it was updated within this many days
/// of the reference instant.
pub const ACTIVE_WINDOW_DAYS: i64 = 90;

/// Compute statistics over a repository list.
///
/// Total function: an empty list yields all-zero stats with
/// `average_stars = 0.0` rather than NaN.
pub fn compute_stats(
    repos: &[RepositorySummary],
    followers: u32,
    following: u32,
    reference: DateTime<Utc>,
) -> RepoStats {
    let mut languages: HashMap<String, u32> = HashMap::new();
    // First-encountered order, used to break top-language ties.
    let mut language_order: Vec<String> = Vec::new();
    let mut total_stars: u64 = 0;
    let mut total_forks: u64 = 0;
    let mut active_repos: u32 = 0;
    let mut empty_repos: u32 = 0;

    let active_window = Duration::days(ACTIVE_WINDOW_DAYS);

    for repo in repos {
        total_stars += u64::from(repo.stars);
        total_forks += u64::from(repo.forks);

        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            let count = languages.entry(language.to_string()).or_insert(0);
            if *count == 0 {
                language_order.push(language.to_string());
            }
            *count += 1;
        }

        if repo.description.as_deref().is_none_or(str::is_empty) {
            empty_repos += 1;
        }

        if reference.signed_duration_since(repo.updated_at) < active_window {
            active_repos += 1;
        }
    }

    // Strict max-scan in first-encountered order keeps ties stable.
    let mut top_language: Option<String> = None;
    let mut top_count: u32 = 0;
    for language in &language_order {
        let count = languages.get(language).copied().unwrap_or(0);
        if count > top_count {
            top_count = count;
            top_language = Some(language.clone());
        }
    }

    let average_stars = if repos.is_empty() {
        0.0
    } else {
        total_stars as f64 / repos.len() as f64
    };

    let follower_ratio = if following == 0 {
        0.0
    } else {
        f64::from(followers) / f64::from(following)
    };

    RepoStats {
        total_stars,
        total_forks,
        languages,
        top_language,
        average_stars,
        active_repos,
        empty_repos,
        follower_ratio,
    }
}
