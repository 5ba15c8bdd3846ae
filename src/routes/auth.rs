// SPDX-License-Identifier: MIT

//! FatSecret OAuth 1.0a authentication routes.
//!
//! Three-legged flow: `/auth/fatsecret/start` obtains a request token and
//! bounces the browser to the vendor's authorize page; the vendor calls
//! back into `/auth/fatsecret/callback`, which exchanges the verified
//! request token for an access token and stores it in two HTTP-only
//! cookies. All callback outcomes are redirects to the frontend with an
//! `auth=` status flag.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::AppState;

/// Access token cookie name.
pub const ACCESS_TOKEN_COOKIE: &str = "fs_at";
/// Access token secret cookie name.
pub const ACCESS_SECRET_COOKIE: &str = "fs_ats";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/fatsecret/start", get(auth_start))
        .route("/auth/fatsecret/callback", get(auth_callback))
}

/// Start the OAuth flow: fetch a request token and redirect to the
/// vendor's authorize page.
///
/// A vendor failure on this leg is surfaced verbatim (status and raw
/// body) rather than translated, since there is no user-facing flow to
/// redirect yet.
async fn auth_start(State(state): State<Arc<AppState>>) -> Result<Redirect> {
    let callback_url = format!("{}/auth/fatsecret/callback", state.config.app_url);

    let request_credentials = state.fatsecret.request_token(&callback_url).await?;

    state
        .pending_tokens
        .put(&request_credentials.token, &request_credentials.secret);

    tracing::info!("Request token issued, redirecting to FatSecret authorize page");

    Ok(Redirect::temporary(
        &state.fatsecret.authorize_url(&request_credentials.token),
    ))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    oauth_token: Option<String>,
    #[serde(default)]
    oauth_verifier: Option<String>,
}

/// OAuth callback: exchange the verified request token for an access
/// token and persist it in cookies.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<Response> {
    let (oauth_token, oauth_verifier) = match (params.oauth_token, params.oauth_verifier) {
        (Some(t), Some(v)) => (t, v),
        _ => {
            tracing::warn!("OAuth callback missing token or verifier");
            return Ok(auth_redirect(&state.config.frontend_url, "denied").into_response());
        }
    };

    let Some(secret) = state.pending_tokens.get(&oauth_token) else {
        // Covers genuine expiry and replay after a successful exchange,
        // since the entry is deleted on success.
        tracing::warn!("OAuth callback with unknown or expired request token");
        return Ok(auth_redirect(&state.config.frontend_url, "expired").into_response());
    };

    let request_credentials = crate::services::OauthCredentials {
        token: oauth_token.clone(),
        secret,
    };

    let access = match state
        .fatsecret
        .exchange_access_token(&request_credentials, &oauth_verifier)
        .await
    {
        Ok(Ok(access)) => access,
        Ok(Err(vendor)) => {
            // The pending entry is deliberately left in place so the user
            // can retry the callback without restarting the whole flow.
            tracing::error!(
                status = vendor.status,
                body = %vendor.body,
                "FatSecret access token exchange failed"
            );
            return Ok(auth_redirect(&state.config.frontend_url, "error").into_response());
        }
        Err(crate::error::AppError::FatSecretTransport(msg)) => {
            // Keep the user in the flow on transport failures too, rather
            // than dumping a bare 502 body mid-login.
            tracing::error!(error = %msg, "FatSecret access token exchange unreachable");
            return Ok(auth_redirect(&state.config.frontend_url, "error").into_response());
        }
        Err(e) => return Err(e),
    };

    state.pending_tokens.delete(&oauth_token);

    tracing::info!("Access token exchanged, storing cookies");

    let jar = jar
        .add(protected_cookie(ACCESS_TOKEN_COOKIE, access.token))
        .add(protected_cookie(ACCESS_SECRET_COOKIE, access.secret));

    Ok((jar, auth_redirect(&state.config.frontend_url, "ok")).into_response())
}

/// Redirect to the frontend with an `auth=` status flag.
fn auth_redirect(frontend_url: &str, status: &str) -> Redirect {
    Redirect::temporary(&format!("{}/?auth={}", frontend_url, status))
}

/// HTTP-only, secure, root-path session cookie.
fn protected_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_redirect_targets() {
        use axum::http::header;
        for status in ["ok", "denied", "expired", "error"] {
            let response = auth_redirect("http://localhost:5173", status).into_response();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap();
            assert_eq!(location, format!("http://localhost:5173/?auth={}", status));
        }
    }

    #[test]
    fn test_protected_cookie_flags() {
        let cookie = protected_cookie(ACCESS_TOKEN_COOKIE, "tok".to_string());
        assert_eq!(cookie.name(), "fs_at");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
