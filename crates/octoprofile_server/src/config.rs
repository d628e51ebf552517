//! Configuration for the octoprofile server.
//!
//! Loaded once at startup and immutable afterwards. Sources, in order
//! (later overrides earlier):
//! 1. Built-in defaults
//! 2. `octoprofile.toml` in the working directory
//! 3. Environment variables with the `OCTOPROFILE_` prefix
//!    (e.g. `OCTOPROFILE_GITHUB_TOKEN`, `OCTOPROFILE_LISTEN`)
//!
//! Example config file:
//! ```toml
//! listen = "127.0.0.1:8080"
//!
//! [github]
//! token = "ghp_..."                      # optional
//! api_root = "https://api.github.com"    # override for GHES
//! page_size = 100
//! timeout_secs = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use octoprofile::github::{DEFAULT_API_ROOT, DEFAULT_PAGE_SIZE, GitHubClientConfig};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listen address for the HTTP server.
    pub listen: String,
    /// Upstream GitHub settings.
    pub github: GitHubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8080".to_string(),
            github: GitHubConfig::default(),
        }
    }
}

/// Upstream GitHub settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API token; requests are unauthenticated when absent.
    /// Can also be set via the OCTOPROFILE_GITHUB_TOKEN environment variable.
    pub token: Option<String>,
    /// REST API root.
    pub api_root: String,
    /// Page size for repository listings.
    pub page_size: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_root: DEFAULT_API_ROOT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration (defaults -> config file -> environment).
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        let local_config = PathBuf::from("octoprofile.toml");
        if local_config.exists() {
            tracing::debug!("loading config from ./octoprofile.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // e.g. OCTOPROFILE_GITHUB_TOKEN -> github.token
        builder = builder.add_source(
            Environment::with_prefix("OCTOPROFILE")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to deserialize config: {e}");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to build config: {e}");
                Config::default()
            }
        }
    }

    /// The client configuration derived from the `[github]` section.
    pub fn client_config(&self) -> GitHubClientConfig {
        GitHubClientConfig {
            api_root: self.github.api_root.clone(),
            token: self.github.token.clone(),
            page_size: self.github.page_size,
            timeout: Duration::from_secs(self.github.timeout_secs),
        }
    }
}
