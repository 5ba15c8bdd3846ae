// SPDX-License-Identifier: MIT

//! Diary and nutrition API routes.
//!
//! `/api/diary` is a raw passthrough: the vendor's body and status come
//! back untouched. `/api/nutrition/day` fetches the same diary and
//! aggregates it into daily totals server-side.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{DaySummary, DiaryResponse};
use crate::routes::auth::{ACCESS_SECRET_COOKIE, ACCESS_TOKEN_COOKIE};
use crate::services::{nutrition, ApiRequest, OauthCredentials};
use crate::time_utils::{days_since_epoch, resolve_diary_date};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/diary", get(get_diary))
        .route("/api/nutrition/day", get(get_nutrition_day))
}

#[derive(Deserialize)]
struct DiaryQuery {
    /// ISO `YYYY-MM-DD`; absent or future dates resolve to yesterday.
    date: Option<String>,
    /// `profile` | `foods` | anything else = diary for the date.
    method: Option<String>,
    /// Search expression for `method=foods`.
    q: Option<String>,
}

/// Read the access credential pair from cookies, or fail with 401 before
/// any network call.
fn access_credentials(jar: &CookieJar) -> Result<OauthCredentials> {
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string());
    let secret = jar.get(ACCESS_SECRET_COOKIE).map(|c| c.value().to_string());
    match (token, secret) {
        (Some(token), Some(secret)) => Ok(OauthCredentials { token, secret }),
        _ => Err(AppError::Unauthorized),
    }
}

fn api_request_for(query: &DiaryQuery) -> ApiRequest {
    match query.method.as_deref() {
        Some("profile") => ApiRequest::Profile,
        Some("foods") => ApiRequest::FoodSearch(
            query.q.clone().unwrap_or_else(|| "apple".to_string()),
        ),
        _ => {
            let date = resolve_diary_date(query.date.as_deref());
            ApiRequest::DiaryForDay(days_since_epoch(date))
        }
    }
}

/// Raw diary passthrough: vendor body and status forwarded verbatim.
async fn get_diary(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<DiaryQuery>,
) -> Result<Response> {
    let access = access_credentials(&jar)?;
    let request = api_request_for(&query);

    tracing::debug!(?request, "Proxying FatSecret API call");

    let vendor = state.fatsecret.call(&access, &request).await?;

    let status = StatusCode::from_u16(vendor.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        vendor.body,
    )
        .into_response())
}

/// Aggregated nutrition for one day.
async fn get_nutrition_day(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<DiaryQuery>,
) -> Result<Json<DaySummary>> {
    let access = access_credentials(&jar)?;
    let date = resolve_diary_date(query.date.as_deref());

    let vendor = state
        .fatsecret
        .call(&access, &ApiRequest::DiaryForDay(days_since_epoch(date)))
        .await?;

    if !vendor.is_success() {
        return Err(AppError::FatSecret {
            status: vendor.status,
            body: vendor.body,
        });
    }

    let diary: DiaryResponse = serde_json::from_str(&vendor.body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("unexpected diary payload: {}", e)))?;

    let entries = diary.into_entries();
    let (totals, entries) = nutrition::aggregate_day(&entries);

    Ok(Json(DaySummary {
        date: date.to_string(),
        totals,
        entries,
    }))
}
