mod config;
mod errors;
mod models;
mod prediction;
mod predictor;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::predictor::load_model;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VirtuAero API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Deployment mode: {:?} (development: {})",
        config.mode, config.development
    );

    // Pages keep working without a model; /predict answers 500 until restart.
    let model = match load_model(&config.paths.model_path).await {
        Ok(model) => {
            info!("Model loaded successfully");
            Some(model)
        }
        Err(e) => {
            error!("Failed to load model: {e}");
            None
        }
    };

    let state = AppState {
        model,
        paths: config.paths.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
