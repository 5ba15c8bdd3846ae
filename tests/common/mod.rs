// SPDX-License-Identifier: MIT

use nutridash::config::Config;
use nutridash::routes::create_router;
use nutridash::services::{FatSecretService, PendingTokenStore};
use nutridash::AppState;
use std::sync::Arc;

/// Create a test app with offline dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let pending_tokens = PendingTokenStore::new();
    let fatsecret = FatSecretService::new(
        config.consumer_key.clone(),
        config.consumer_secret.clone(),
    );

    let state = Arc::new(AppState {
        config,
        pending_tokens,
        fatsecret,
    });

    (create_router(state.clone()), state)
}
