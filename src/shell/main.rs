use tracing_subscriber::{EnvFilter, fmt};

use event_sourcing::shell::config::AppConfig;
use event_sourcing::shell::http::router;
use event_sourcing::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let app = router(AppState::in_memory(config.retry_policy));

    tracing::info!(
        max_conflict_retries = config.retry_policy.max_retries,
        "Accounts endpoint: http://{}/accounts",
        config.bind_addr
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
