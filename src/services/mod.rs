// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod fatsecret;
pub mod nutrition;
pub mod oauth1;
pub mod token_store;

pub use fatsecret::{ApiRequest, FatSecretService, OauthCredentials, VendorResponse};
pub use oauth1::Oauth1Signer;
pub use token_store::PendingTokenStore;
