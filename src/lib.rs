// SPDX-License-Identifier: MIT

//! Nutridash: personal nutrition dashboard backend
//!
//! This crate provides the backend API for a nutrition dashboard built on
//! the FatSecret platform. It handles the OAuth 1.0a three-legged flow,
//! proxies signed food-diary requests, and aggregates diary entries into
//! daily nutrient totals.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{FatSecretService, PendingTokenStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub pending_tokens: PendingTokenStore,
    pub fatsecret: FatSecretService,
}
