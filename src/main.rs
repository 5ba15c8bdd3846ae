// SPDX-License-Identifier: MIT

//! Nutridash API Server
//!
//! Backend for a personal nutrition dashboard: FatSecret OAuth 1.0a
//! authentication, signed food-diary proxying, and daily nutrition
//! aggregation.

use nutridash::{
    config::Config,
    services::{FatSecretService, PendingTokenStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Nutridash API");

    // Pending request-token store (start-to-callback window only)
    let pending_tokens = PendingTokenStore::new();

    // FatSecret client with consumer credentials
    let fatsecret = FatSecretService::new(
        config.consumer_key.clone(),
        config.consumer_secret.clone(),
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        pending_tokens,
        fatsecret,
    });

    // Build router
    let app = nutridash::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nutridash=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
