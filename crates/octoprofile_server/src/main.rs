//! Octoprofile server - HTTP boundary for GitHub profile aggregation.

mod config;
mod routes;
mod shutdown;

use octoprofile::GitHubClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("octoprofile=info,octoprofile_server=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    // Single initialization point; the config is immutable afterwards.
    let config = config::Config::load();
    let client = GitHubClient::new(config.client_config())?;

    let app = routes::router(routes::AppState { client });
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;

    tracing::info!(address = %config.listen, "server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    tracing::info!("server shutdown complete");

    Ok(())
}
