use reading_tracker::{AppState, Config, load_store, router, spawn_saver};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const SHUTDOWN_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = Arc::new(load_store(&config.data_path, &config.seed_members).await);
    info!(
        "loaded {} members from {}",
        store.members.len(),
        config.data_path.display()
    );

    let (saver, writer) = spawn_saver(config.data_path.clone(), Arc::clone(&store));
    let app = router(AppState::new(store, saver));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // the router (and with it the last saver) is gone; wait for the final write
    match tokio::time::timeout(SHUTDOWN_FLUSH_TIMEOUT, writer).await {
        Ok(Ok(())) => info!("store flushed, bye"),
        Ok(Err(err)) => warn!("store writer failed: {err}"),
        Err(_) => warn!("timed out waiting for store writer"),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
