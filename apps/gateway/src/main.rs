mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Result;
use records::rpc::RecruitmentClient;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging (the RPC client logs under `records`)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{pkg}={level},records={level},tower_http={level}",
                pkg = env!("CARGO_PKG_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting API gateway v{}", env!("CARGO_PKG_VERSION"));

    // Lazy: nothing is dialled until the first request
    let records = RecruitmentClient::connect(&config.records_addr)?;
    info!("Record service client targets {}", records.base_url());

    let state = AppState { records };
    let app = build_router(state, &config.static_dir).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
