//! CLI entry point for the nodegraph HTTP server.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use nodegraph_core::AppConfig;
use nodegraph_graph::{GraphClient, GraphConfig};
use nodegraph_server::{create_router, serve, AppState};

#[derive(Parser)]
#[command(name = "nodegraph-server")]
#[command(about = "HTTP API for fetching the node graph and toggling node selection")]
struct Cli {
    /// Config file prefix (default: nodegraph).
    #[arg(short, long, default_value = "nodegraph")]
    config: String,

    /// Listen port; overrides PORT and the config file.
    #[arg(short, long)]
    port: Option<u16>,

    /// Listen address.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let app_config = AppConfig::load(&cli.config).context("Failed to load configuration")?;
    let port = cli.port.unwrap_or(app_config.port);

    // Connect to Neo4j.
    let graph = GraphClient::connect(&GraphConfig::from(&app_config)).await?;

    let router = create_router(AppState::new(Arc::new(graph)));
    let listener = TcpListener::bind((cli.host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{port}", cli.host))?;

    serve(listener, router, shutdown_signal()).await?;

    // The router, and with it the last GraphClient handle, is gone by now.
    tracing::info!("Server stopped, Neo4j connections released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down gracefully");
}
