//! Conversion from GitHub wire types to domain types.

use crate::types::{RepositorySummary, UserProfile};

use super::types::{RawRepo, RawUser};

pub fn to_user_profile(raw: RawUser) -> UserProfile {
    UserProfile {
        login: raw.login,
        name: raw.name,
        bio: raw.bio,
        location: raw.location,
        avatar_url: raw.avatar_url,
        followers: raw.followers,
        following: raw.following,
        created_at: raw.created_at,
    }
}

pub fn to_repository_summary(raw: RawRepo) -> RepositorySummary {
    RepositorySummary {
        name: raw.name,
        description: raw.description,
        language: raw.language,
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        updated_at: raw.updated_at,
        html_url: raw.html_url,
    }
}
