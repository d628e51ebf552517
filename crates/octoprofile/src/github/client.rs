//! GitHub REST client: user lookup and paginated repository listing.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};

use crate::types::{RepositorySummary, UserProfile};

use super::convert::{to_repository_summary, to_user_profile};
use super::error::GitHubError;
use super::types::{RawRepo, RawUser};

/// Default API root for github.com. Overridable for GHES hosts and tests.
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Default per-page size for repository listings (GitHub's maximum).
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const CLIENT_USER_AGENT: &str = "octoprofile";

/// Configuration for a [`GitHubClient`], fixed at construction.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the REST API.
    pub api_root: String,
    /// Bearer token; unauthenticated when absent.
    pub token: Option<String>,
    /// Page size for repository listings.
    pub page_size: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
        }
    }
}

/// A read-only GitHub REST API client.
///
/// Cheap to clone; holds no per-request state.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_root: String,
    token: Option<String>,
    page_size: u32,
}

impl GitHubClient {
    /// Build a client from its configuration.
    pub fn new(config: GitHubClientConfig) -> Result<Self, GitHubError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_root: config.api_root.trim_end_matches('/').to_string(),
            token: config.token,
            page_size: config.page_size.max(1),
        })
    }

    /// Fetch a user's profile via `GET /users/{username}`.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile, GitHubError> {
        let route = format!("/users/{username}");
        let resource = format!("user {username}");

        let response = self.get(&route, &resource).await?;
        let raw: RawUser = response
            .json()
            .await
            .map_err(|e| GitHubError::decode(e.to_string()))?;

        Ok(to_user_profile(raw))
    }

    /// Fetch every repository owned by `username`.
    ///
    /// Walks `GET /users/{username}/repos` page by page, following the
    /// `Link` header's `rel="next"` entry until the upstream signals no
    /// further pages. Pages depend on each other's continuation, so the walk
    /// is sequential by design. The full list is returned as one sequence.
    pub async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary>, GitHubError> {
        let resource = format!("repositories for {username}");
        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let route = format!(
                "/users/{username}/repos?per_page={}&page={page}",
                self.page_size
            );

            let response = self.get(&route, &resource).await?;
            let next = response
                .headers()
                .get("link")
                .and_then(|v| v.to_str().ok())
                .and_then(next_page_from_link);

            let batch: Vec<RawRepo> = response
                .json()
                .await
                .map_err(|e| GitHubError::decode(e.to_string()))?;

            tracing::debug!(username, page, count = batch.len(), "fetched repository page");

            repos.extend(batch.into_iter().map(to_repository_summary));

            // The Link header is absent on the last (or only) page.
            match next {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        Ok(repos)
    }

    async fn get(&self, route: &str, resource: &str) -> Result<reqwest::Response, GitHubError> {
        let url = format!("{}{route}", self.api_root);

        let mut request = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        check_status(response, resource).await
    }
}

/// Map a non-success response to a typed error.
async fn check_status(
    response: reqwest::Response,
    resource: &str,
) -> Result<reqwest::Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(GitHubError::not_found(resource));
    }

    if is_rate_limit_response(status, response.headers()) {
        let reset_at = rate_limit_reset(response.headers());
        return Err(GitHubError::RateLimited { reset_at });
    }

    let message = response.text().await.unwrap_or_default();
    Err(GitHubError::Api {
        status: status.as_u16(),
        message: short_message(&message),
    })
}

/// GitHub signals rate limiting with 429, or 403 once the quota is exhausted.
fn is_rate_limit_response(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0")
}

/// Read the reset instant from `x-ratelimit-reset` (epoch seconds).
fn rate_limit_reset(headers: &HeaderMap) -> DateTime<Utc> {
    headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
}

/// Extract the `rel="next"` page number from a `Link` header.
///
/// Header format:
/// `<https://api.github.com/users/alice/repos?per_page=100&page=2>; rel="next", <...&page=3>; rel="last"`
fn next_page_from_link(link_header: &str) -> Option<u32> {
    for part in link_header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.trim().split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Some(value.trim_matches('"'));
            }
        }

        if rel == Some("next") {
            return url.and_then(extract_page_param);
        }
    }

    None
}

/// Pull the `page` query parameter out of a pagination URL.
fn extract_page_param(url: &str) -> Option<u32> {
    let query = url.split('?').nth(1)?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|v| v.parse().ok())
}

/// Keep only the first line of an upstream error body.
fn short_message(body: &str) -> String {
    body.lines().next().unwrap_or_default().trim().to_string()
}
