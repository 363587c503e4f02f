use crate::{
    activity::ActivityMap, app::state::AppState, authn::TeacherCredentials,
    session::MemorySessionStore,
};
use anyhow::{Context, Result};
use futures_util::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{error, info};

pub mod api;
pub mod error;
pub mod metrics;
mod router;
pub mod state;
pub mod util;

pub(crate) async fn run() -> Result<()> {
    let config = crate::config::load().context("Failed to load config")?;
    info!("App config: {:?}", config);

    let credentials = TeacherCredentials::load(&config.credentials_file)
        .context("Failed to load teacher credentials")?;

    let state = AppState::new(
        config.clone(),
        credentials,
        ActivityMap::seeded(),
        MemorySessionStore::new(),
        metrics::METRICS.clone(),
    );

    let metrics_server = axum::Server::bind(&config.metrics_listener_address)
        .serve(metrics::router().into_make_service());
    tokio::spawn(async move {
        if let Err(err) = metrics_server.await {
            error!(error = %err, "Metrics server failed");
        }
    });

    info!("Server is starting...");

    axum::Server::bind(&config.listener_address)
        .serve(router::new(state).into_make_service())
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    Ok(())
}

async fn wait_for_signal() {
    match Signals::new([SIGINT, SIGTERM]) {
        Ok(mut signals) => {
            signals.next().await;
            info!("Shutdown signal received");
        }
        Err(err) => {
            error!(error = %err, "Failed to install signal handlers");
            std::future::pending::<()>().await;
        }
    }
}
