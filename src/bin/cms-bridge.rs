use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cms_bridge::config::proc_loader::file_to_config;
use cms_bridge::server;
use cms_bridge::server::server::AppState;
use cms_bridge::utils::http_client;
use cms_bridge::utils::logging::{self, LogLevel};
use tracing::info;
use tracing::instrument::WithSubscriber;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "cms-bridge.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load YAML config, start logging
    // -------------------------------

    // the configured subscriber needs the config; load under a bootstrap one
    let service_config = file_to_config(Path::new(&args.config))
        .with_subscriber(logging::bootstrap_dispatch())
        .await?;
    logging::run(&service_config, args.log_level);

    // -------------------------------
    // 2. Outbound client, token provider, remote clients
    // -------------------------------

    let client = http_client::build(&service_config.settings.http)?;
    let state = AppState::from_config(&service_config, client).await;

    // -------------------------------
    // 3. Serve the management API until shutdown
    // -------------------------------

    info!("Service starting...");
    server::server::start(&service_config.settings, state, shutdown_signal()).await?;
    info!("Service stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("ctrl-c received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }
}
