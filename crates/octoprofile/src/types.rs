//! Domain types: per-request snapshots and the aggregated response shape.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A GitHub user profile (immutable snapshot, fetched once per request).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// Username/login.
    pub login: String,
    /// Display name (if set).
    pub name: Option<String>,
    /// User bio (if set).
    pub bio: Option<String>,
    /// Location (if set).
    pub location: Option<String>,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Number of followers.
    pub followers: u32,
    /// Number of accounts the user follows.
    pub following: u32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A repository owned by the queried user.
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySummary {
    /// Repository name.
    pub name: String,
    /// Repository description (if set).
    pub description: Option<String>,
    /// Primary programming language (if detected).
    pub language: Option<String>,
    /// Star count.
    pub stars: u32,
    /// Fork count.
    pub forks: u32,
    /// When the repository was last updated.
    pub updated_at: DateTime<Utc>,
    /// Web URL of the repository.
    pub html_url: String,
}

/// Statistics derived from a repository list.
///
/// A pure function of the list at the moment of computation; never persisted
/// and never shared across requests.
#[derive(Debug, Clone, Serialize)]
pub struct RepoStats {
    /// Sum of stars across all repositories.
    pub total_stars: u64,
    /// Sum of forks across all repositories.
    pub total_forks: u64,
    /// Repository count per primary language. Only repositories with a
    /// non-empty language contribute an entry.
    pub languages: HashMap<String, u32>,
    /// Most frequent language; ties break by first-encountered order in the
    /// repository list. `None` when no repository has a language.
    pub top_language: Option<String>,
    /// Average stars per repository; `0.0` for an empty list.
    pub average_stars: f64,
    /// Repositories updated within the active window (90 days).
    pub active_repos: u32,
    /// Repositories with no description.
    pub empty_repos: u32,
    /// Followers divided by following; `0.0` when following is zero.
    pub follower_ratio: f64,
}

/// A repository reduced to the fields exposed in the response.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u32,
    pub forks: u32,
}

impl From<&RepositorySummary> for RepositoryEntry {
    fn from(repo: &RepositorySummary) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            url: repo.html_url.clone(),
            stars: repo.stars,
            forks: repo.forks,
        }
    }
}

/// The aggregated response: profile fields, the reduced repository list, and
/// the derived stats block.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: String,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub repositories: Vec<RepositoryEntry>,
    pub stats: RepoStats,
}

impl ProfileSummary {
    /// Assemble the response from a profile, its repositories, and the stats
    /// computed over them.
    pub fn assemble(profile: UserProfile, repos: &[RepositorySummary], stats: RepoStats) -> Self {
        Self {
            login: profile.login,
            name: profile.name,
            bio: profile.bio,
            location: profile.location,
            avatar_url: profile.avatar_url,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.created_at,
            repositories: repos.iter().map(RepositoryEntry::from).collect(),
            stats,
        }
    }
}
