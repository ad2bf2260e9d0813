//! Listener binding and the serve loop.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::utils::shutdown_signal;

/// Bind the listening socket for `config`.
///
/// A bind failure is fatal for the process; callers propagate it.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve the API on `listener` until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, config: Config) -> Result<()> {
    run_until(listener, config, shutdown_signal()).await
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn run_until<F>(listener: TcpListener, config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, environment = %config.env, "HTTP server listening");

    let router = create_router(AppState::new(config));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
