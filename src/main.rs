//! API Avengers demo service entry point.

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_avengers_demo::config::Config;
use api_avengers_demo::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also pulls in .env, which may set RUST_LOG)
    let config = Config::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("========================================");
    info!("API AVENGERS DEMO STARTING");
    info!("Environment: {}", config.env);
    info!("Port: {}", config.port);
    info!("========================================");

    let listener = server::bind(&config).await?;
    server::run(listener, config).await?;

    Ok(())
}
