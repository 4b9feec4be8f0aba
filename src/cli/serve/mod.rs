//! Serve command - document, health probes and static frontend on one port

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use super::bootstrap;
use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::infrastructure::DocumentLoader;

#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Document path or http(s) URL (overrides config)
    #[arg(long)]
    pub source: Option<String>,

    /// Static frontend directory (overrides config)
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the server
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let source = args.source.clone().unwrap_or_else(|| config.leaderboard.source.clone());
    let static_dir = args
        .static_dir
        .clone()
        .unwrap_or_else(|| config.leaderboard.static_dir.clone());

    let dataset = DocumentLoader::from_source(&source).load().await?;
    let app = create_router(AppState::new(dataset, source), &static_dir);

    let addr = build_socket_addr(&config, args.port)?;
    info!("Starting leaderboard server on {} (static files from {})", addr, static_dir);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig, port: Option<u16>) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        port.unwrap_or(config.server.port),
    )))
}
