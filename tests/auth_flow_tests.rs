// SPDX-License-Identifier: MIT

//! OAuth callback flow tests.
//!
//! These tests cover the callback outcomes that need no real vendor:
//! 1. Missing token/verifier params redirect with `auth=denied`
//! 2. Unknown or expired request tokens redirect with `auth=expired`
//! 3. Transport failures during the exchange redirect with `auth=error`

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_callback_without_params_redirects_denied() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/fatsecret/callback")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://localhost:5173/?auth=denied");
}

#[tokio::test]
async fn test_callback_missing_verifier_redirects_denied() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/fatsecret/callback?oauth_token=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://localhost:5173/?auth=denied");
}

#[tokio::test]
async fn test_callback_unknown_token_redirects_expired() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/fatsecret/callback?oauth_token=never-issued&oauth_verifier=v")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://localhost:5173/?auth=expired");
}

#[tokio::test]
async fn test_callback_transport_failure_redirects_error() {
    use nutridash::config::Config;
    use nutridash::routes::create_router;
    use nutridash::services::fatsecret::Endpoints;
    use nutridash::services::{FatSecretService, PendingTokenStore};
    use nutridash::AppState;
    use std::sync::Arc;

    let config = Config::test_default();

    // Point the exchange at a port nothing listens on, so the request
    // fails at the transport level before any vendor response exists.
    let endpoints = Endpoints {
        access_token_url: "http://127.0.0.1:1/oauth/access_token".to_string(),
        ..Endpoints::default()
    };
    let fatsecret = FatSecretService::with_endpoints(
        config.consumer_key.clone(),
        config.consumer_secret.clone(),
        endpoints,
    );

    let pending_tokens = PendingTokenStore::new();
    pending_tokens.put("tok", "sec");

    let state = Arc::new(AppState {
        config,
        pending_tokens,
        fatsecret,
    });
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/fatsecret/callback?oauth_token=tok&oauth_verifier=v")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://localhost:5173/?auth=error");
}

#[tokio::test]
async fn test_callback_replay_after_delete_redirects_expired() {
    let (app, state) = common::create_test_app();

    // Simulate the successful-exchange cleanup: the entry is gone, so a
    // replayed callback must look expired rather than crash.
    state.pending_tokens.put("tok", "sec");
    state.pending_tokens.delete("tok");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/fatsecret/callback?oauth_token=tok&oauth_verifier=v")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://localhost:5173/?auth=expired");
}
