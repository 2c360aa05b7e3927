//! TTL-based caching for parsed transcript records.

use super::types::TranscriptRecord;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

/// A key derived from the uploaded document's bytes, used for cache lookups.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Creates a key by hashing the raw document bytes.
    ///
    /// The bytes are hashed so the cache never holds the document itself.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let result = hasher.finalize();
        // Use first 16 bytes as hex string
        let digest = hex::encode(&result[..16]);
        Self(digest)
    }

    /// Returns the internal digest string (for logging/debugging).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only show first 8 chars to keep log lines short
        write!(f, "{}...", &self.0[..8.min(self.0.len())])
    }
}

/// A cached parse result with metadata.
#[derive(Clone)]
struct CachedRecord {
    /// The cached record
    result: TranscriptRecord,
    /// When this entry was cached
    cached_at: Instant,
    /// TTL for this specific entry
    ttl: Duration,
}

/// Thread-safe cache for parse results.
///
/// Uses DashMap for concurrent access without external locking.
pub struct ParseCache {
    entries: DashMap<DocumentKey, CachedRecord>,
    default_ttl: Duration,
}

impl ParseCache {
    /// Creates a new cache with the specified default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    /// Creates a cache with a 5-minute default TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }

    /// Gets a cached record if it exists and hasn't expired.
    pub fn get(&self, key: &DocumentKey) -> Option<TranscriptRecord> {
        self.entries.get(key).and_then(|entry| {
            if entry.cached_at.elapsed() < entry.ttl {
                Some(entry.result.clone())
            } else {
                // Entry expired, remove it
                drop(entry);
                self.entries.remove(key);
                None
            }
        })
    }

    /// Inserts a parse result into the cache with the default TTL.
    pub fn insert(&self, key: DocumentKey, result: TranscriptRecord) {
        self.insert_with_ttl(key, result, self.default_ttl);
    }

    /// Inserts a parse result with a custom TTL.
    pub fn insert_with_ttl(&self, key: DocumentKey, result: TranscriptRecord, ttl: Duration) {
        self.entries.insert(
            key,
            CachedRecord {
                result,
                cached_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Invalidates (removes) a cached entry.
    pub fn invalidate(&self, key: &DocumentKey) {
        self.entries.remove(key);
    }

    /// Clears all entries from the cache.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Returns the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes expired entries from the cache.
    ///
    /// Call this periodically if you want proactive cleanup.
    pub fn cleanup_expired(&self) {
        self.entries
            .retain(|_, entry| entry.cached_at.elapsed() < entry.ttl);
    }

    /// Gets cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut total = 0;
        let mut expired = 0;

        for entry in self.entries.iter() {
            total += 1;
            if entry.cached_at.elapsed() >= entry.ttl {
                expired += 1;
            }
        }

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Helper module for hex encoding (avoiding extra dependency).
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_key_hashing() {
        let key1 = DocumentKey::from_bytes(b"same document bytes");
        let key2 = DocumentKey::from_bytes(b"same document bytes");
        let key3 = DocumentKey::from_bytes(b"different document");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_eq!(key1.as_str().len(), 32);
    }

    #[test]
    fn test_cache_roundtrip_and_invalidate() {
        let cache = ParseCache::with_default_ttl();
        let key = DocumentKey::from_bytes(b"doc");
        let record = TranscriptRecord {
            gpa: 3.5,
            ..Default::default()
        };

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), record.clone());
        assert_eq!(cache.get(&key), Some(record));

        cache.invalidate(&key);
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_expired_entry_removed_on_read() {
        let cache = ParseCache::with_default_ttl();
        let key = DocumentKey::from_bytes(b"doc");
        cache.insert_with_ttl(key.clone(), TranscriptRecord::default(), Duration::ZERO);

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats_count_expired() {
        let cache = ParseCache::with_default_ttl();
        cache.insert_with_ttl(
            DocumentKey::from_bytes(b"old"),
            TranscriptRecord::default(),
            Duration::ZERO,
        );
        cache.insert(DocumentKey::from_bytes(b"new"), TranscriptRecord::default());

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.expired_entries, 1);
        assert_eq!(stats.active_entries, 1);

        cache.cleanup_expired();
        assert_eq!(cache.len(), 1);
    }
}
