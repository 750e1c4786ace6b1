// Site server binary entry point
//
// Purpose: serve the catalog over HTTP
// Usage: cargo run --bin site_server

use responsabilidade_social::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "responsabilidade_social=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  SITE_BASE_PATH: {:?}", config.base_path);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());

    let addr = config.socket_addr();
    let home = config.home_href();

    // Validates the catalog before anything is served
    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {} (home: {})", addr, home);

    axum::serve(listener, app).await?;

    Ok(())
}
