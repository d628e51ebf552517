//! Wire types for the GitHub REST API.
//!
//! Only the fields the aggregator consumes are declared; serde ignores the
//! rest of the payload. Nullable fields default so that sparse profiles
//! still decode.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /users/{username}` response, reduced to the consumed fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// One element of a `GET /users/{username}/repos` page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub html_url: String,
}
