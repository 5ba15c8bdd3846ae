// SPDX-License-Identifier: MIT

//! FatSecret API client.
//!
//! Handles:
//! - OAuth 1.0a request-token and access-token legs
//! - Signed GETs against the method-dispatch REST endpoint
//!
//! FatSecret wants OAuth parameters in the form body for the request-token
//! POST and in the URL query for everything else; an Authorization header
//! is not accepted for GET requests.

use crate::error::AppError;
use crate::services::oauth1::Oauth1Signer;
use std::collections::HashMap;

const REQUEST_TOKEN_URL: &str = "https://authentication.fatsecret.com/oauth/request_token";
const AUTHORIZE_URL: &str = "https://authentication.fatsecret.com/oauth/authorize";
const ACCESS_TOKEN_URL: &str = "https://authentication.fatsecret.com/oauth/access_token";
const API_URL: &str = "https://platform.fatsecret.com/rest/server.api";

/// What to ask the vendor API for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// `food_entries.get.v2` for an integer day index (days since 1970-01-01).
    DiaryForDay(i64),
    /// `profile.get`.
    Profile,
    /// `foods.search` with a search expression.
    FoodSearch(String),
}

impl ApiRequest {
    /// Vendor parameters for this request mode, JSON format always.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("format".to_string(), "json".to_string())];
        match self {
            ApiRequest::DiaryForDay(days) => {
                params.push(("method".to_string(), "food_entries.get.v2".to_string()));
                params.push(("date".to_string(), days.to_string()));
            }
            ApiRequest::Profile => {
                params.push(("method".to_string(), "profile.get".to_string()));
            }
            ApiRequest::FoodSearch(expr) => {
                params.push(("method".to_string(), "foods.search".to_string()));
                params.push(("search_expression".to_string(), expr.clone()));
            }
        }
        params
    }
}

/// Temporary or long-lived OAuth credential pair.
#[derive(Debug, Clone)]
pub struct OauthCredentials {
    pub token: String,
    pub secret: String,
}

/// Raw vendor response: status plus unmodified body.
#[derive(Debug, Clone)]
pub struct VendorResponse {
    pub status: u16,
    pub body: String,
}

impl VendorResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Vendor endpoint URLs, overridable for tests and local stubs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub request_token_url: String,
    pub authorize_url: String,
    pub access_token_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            request_token_url: REQUEST_TOKEN_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            access_token_url: ACCESS_TOKEN_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }
}

/// FatSecret API client holding the signer and HTTP client.
#[derive(Clone)]
pub struct FatSecretService {
    http: reqwest::Client,
    signer: Oauth1Signer,
    request_token_url: String,
    authorize_url: String,
    access_token_url: String,
    api_url: String,
}

impl FatSecretService {
    pub fn new(consumer_key: String, consumer_secret: String) -> Self {
        Self::with_endpoints(consumer_key, consumer_secret, Endpoints::default())
    }

    /// Client pointed at custom endpoints.
    pub fn with_endpoints(
        consumer_key: String,
        consumer_secret: String,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            signer: Oauth1Signer::new(consumer_key, consumer_secret),
            request_token_url: endpoints.request_token_url,
            authorize_url: endpoints.authorize_url,
            access_token_url: endpoints.access_token_url,
            api_url: endpoints.api_url,
        }
    }

    /// Vendor authorize page URL for a request token (browser redirect
    /// target of the second OAuth leg).
    pub fn authorize_url(&self, request_token: &str) -> String {
        format!(
            "{}?oauth_token={}",
            self.authorize_url,
            urlencoding::encode(request_token)
        )
    }

    /// First OAuth leg: obtain a temporary request token.
    ///
    /// Signs a POST with `oauth_callback` and sends everything
    /// form-encoded in the body. A vendor failure carries the raw body and
    /// status so the caller can surface it verbatim.
    pub async fn request_token(&self, callback_url: &str) -> Result<OauthCredentials, AppError> {
        let data = vec![("oauth_callback".to_string(), callback_url.to_string())];
        let mut form = data.clone();
        form.extend(self.signer.authorize("POST", &self.request_token_url, &data, None));

        let response = self
            .http
            .post(&self.request_token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::FatSecretTransport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            tracing::error!(status, body = %body, "FatSecret request_token failed");
            return Err(AppError::FatSecret { status, body });
        }

        parse_token_response(&body).ok_or_else(|| AppError::FatSecret {
            status,
            body: format!("missing token fields in response: {}", body),
        })
    }

    /// Third OAuth leg: exchange the verified request token for a
    /// long-lived access token. All params travel in the URL query.
    pub async fn exchange_access_token(
        &self,
        request_credentials: &OauthCredentials,
        verifier: &str,
    ) -> Result<Result<OauthCredentials, VendorResponse>, AppError> {
        let query = self.exchange_query(request_credentials, verifier);

        let response = self
            .http
            .get(&self.access_token_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::FatSecretTransport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            // Not an error for the caller: the auth flow redirects with a
            // status flag instead of surfacing a body.
            return Ok(Err(VendorResponse { status, body }));
        }

        match parse_token_response(&body) {
            Some(creds) => Ok(Ok(creds)),
            None => Ok(Err(VendorResponse { status, body })),
        }
    }

    /// Build the signed query for the access-token exchange.
    ///
    /// `oauth_token` comes from the signer only: each OAuth protocol
    /// parameter must appear exactly once in both the signature base
    /// string and the transmitted query (RFC 5849 §3.1).
    fn exchange_query(
        &self,
        request_credentials: &OauthCredentials,
        verifier: &str,
    ) -> Vec<(String, String)> {
        let data = vec![("oauth_verifier".to_string(), verifier.to_string())];
        let auth = self.signer.authorize(
            "GET",
            &self.access_token_url,
            &data,
            Some((&request_credentials.token, &request_credentials.secret)),
        );

        let mut query = data;
        query.extend(auth);
        query
    }

    /// Signed GET against the method-dispatch API endpoint. Returns the
    /// vendor's status and body untouched.
    pub async fn call(
        &self,
        access: &OauthCredentials,
        request: &ApiRequest,
    ) -> Result<VendorResponse, AppError> {
        let params = request.params();
        let auth = self.signer.authorize(
            "GET",
            &self.api_url,
            &params,
            Some((&access.token, &access.secret)),
        );

        let mut query = params;
        query.extend(auth);

        let response = self
            .http
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::FatSecretTransport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(VendorResponse { status, body })
    }
}

/// Parse a URL-encoded `oauth_token=...&oauth_token_secret=...` body.
fn parse_token_response(body: &str) -> Option<OauthCredentials> {
    let fields: HashMap<&str, String> = body
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((k, urlencoding::decode(v).ok()?.into_owned()))
        })
        .collect();

    Some(OauthCredentials {
        token: fields.get("oauth_token").filter(|t| !t.is_empty())?.clone(),
        secret: fields
            .get("oauth_token_secret")
            .filter(|s| !s.is_empty())?
            .clone(),
    })
}
