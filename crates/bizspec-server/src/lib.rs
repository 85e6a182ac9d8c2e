pub mod cli;
pub mod config;
pub mod cors;
mod routes;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use bizspec_service::Translator;
use tokio::net::TcpListener;

pub use routes::{AppState, InnerAppState};

/// Build the application router. `translator` is `None` when the service
/// is running without credentials; translate requests then report a
/// configuration error.
pub fn build_app(translator: Option<Translator>, cors_origins: &[String]) -> Result<Router> {
    let state = Arc::new(InnerAppState { translator });
    let cors = cors::cors_layer(cors_origins)?;
    Ok(routes::build_router(state).layer(cors))
}

/// Serve `app` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
