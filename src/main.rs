use bookswipe_api::api::{create_router, AppState};
use bookswipe_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookswipe_api=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize application state
    let state = AppState::new(config.max_recommendations);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "bookswipe-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
