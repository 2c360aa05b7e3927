//! Shared application state for the dwparse service.

use crate::transcript::cache::ParseCache;
use std::time::Duration;

/// State shared across all request handlers.
pub struct AppState {
    /// Cache of parse results keyed by document digest
    pub parse_cache: ParseCache,
}

impl AppState {
    /// Creates application state with the given cache TTL.
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            parse_cache: ParseCache::new(cache_ttl),
        }
    }
}
