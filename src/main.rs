use breakup_recovery::{AppConfig, AppState, router};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let state = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || AppState::from_config(&config)).await??
    };
    {
        let history = state.history.lock().await;
        info!(
            data_dir = %config.data_dir.display(),
            entries = history.entries().len(),
            seeded = config.rng_seed.is_some(),
            "loaded history"
        );
    }

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        return;
    }
    info!("shutting down");
}
