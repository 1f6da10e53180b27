use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use tokio::signal;
use tracing::info;

mod api;
mod error;
mod server;

pub use error::StartupError;

/// Fixed bind address: all interfaces, port 5000. There is deliberately no
/// configuration surface for host or port.
const BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing. RUST_LOG filters the output; it cannot change
    // behaviour. Failure diagnostics reach stderr through the Err return
    // below, so they stay distinguishable from this operational stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genesis_health=info,tower_http=warn".into()),
        )
        .init();

    let listener = server::bind(BIND_ADDR)
        .await
        .context("failed to start health service")?;

    info!(addr = %BIND_ADDR, "health service listening");
    info!("  Health: GET /api/health");

    server::run(listener, shutdown_signal()).await?;

    info!("shutdown signal received, exiting");
    Ok(())
}

/// Resolves on Ctrl+C or (on unix) SIGTERM, triggering graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
