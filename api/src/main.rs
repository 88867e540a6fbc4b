use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfarer_api::{application::http::server::http_server, args::Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    let args = Arc::new(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = args.server.port;
    let state = http_server::state(args);
    let router = http_server::router(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Server running at http://localhost:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
