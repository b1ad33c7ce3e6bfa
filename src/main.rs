use anyhow::Context;
use baht_bot::core::config::AppConfig;
use baht_bot::core::logging::init_logging;
use baht_bot::core::traits::ServerStatus;
use baht_bot::{create_binance_connector, create_bitkub_connector};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = std::env::var("DOTENV_PATH").ok().filter(|p| !p.is_empty());
    let config = AppConfig::load(dotenv_path.as_deref()).context("failed to load config")?;

    init_logging(config.app_env).context("failed to initialize logging")?;
    info!(app_env = %config.app_env, "Config loaded");

    let shutdown = CancellationToken::new();

    let bitkub = create_bitkub_connector(&config.bitkub).context("failed to build Bitkub client")?;
    let binance = create_binance_connector(&config.binance)
        .context("failed to build Binance client")?;

    match binance.check_server_time(&shutdown).await {
        Ok(server_time) => info!(server_time, "Binance server reachable"),
        Err(e) => warn!(error = %e, "Binance server time check failed"),
    }

    info!(bitkub_base_url = bitkub.base_url(), "App started");

    wait_for_shutdown_signal().await?;
    info!("App is shutting down...");
    shutdown.cancel();

    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result.context("failed to listen for SIGINT")?,
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")
}
