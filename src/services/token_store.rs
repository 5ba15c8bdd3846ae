// SPDX-License-Identifier: MIT

//! In-memory store for pending OAuth request tokens.
//!
//! A request token only lives for the window between the start leg and the
//! callback leg of the OAuth flow. Entries carry a TTL so that abandoned
//! logins cannot grow the map without bound; an expired entry behaves as
//! absent and is purged on lookup.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default lifetime of a pending request token (well above the seconds a
/// user normally spends on the vendor's authorize page).
const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

struct PendingEntry {
    secret: String,
    inserted_at: Instant,
}

/// Process-wide map from a temporary OAuth token to its secret.
#[derive(Clone)]
pub struct PendingTokenStore {
    entries: Arc<DashMap<String, PendingEntry>>,
    ttl: Duration,
}

impl Default for PendingTokenStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }
}

impl PendingTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom entry lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Remember the secret for a request token.
    pub fn put(&self, token: &str, secret: &str) {
        self.entries.insert(
            token.to_string(),
            PendingEntry {
                secret: secret.to_string(),
                inserted_at: Instant::now(),
            },
        );
    }

    /// Look up the secret for a request token. Expired entries are treated
    /// as absent and removed.
    pub fn get(&self, token: &str) -> Option<String> {
        let expired = match self.entries.get(token) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                return Some(entry.secret.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(token);
        }
        None
    }

    /// Drop a request token after a successful exchange.
    pub fn delete(&self, token: &str) {
        self.entries.remove(token);
    }

    /// Number of live (possibly expired but not yet purged) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
