//! Fetch outcome caching
//!
//! Outcomes are kept for a fixed TTL in a capacity-bounded LRU store. Failed
//! outcomes are cached too: a URL that failed is not retried until its entry
//! expires.

use crate::fetcher::FetchResult;
use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A cached fetch outcome
///
/// Stores the outcome along with the timestamp when it was inserted, allowing
/// for expiration checks.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached outcome
    pub value: FetchResult,

    /// When the outcome was stored
    pub inserted_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates a new entry stamped with the current time
    pub fn new(value: FetchResult) -> Self {
        Self {
            value,
            inserted_at: Utc::now(),
        }
    }

    /// Checks if the entry is older than `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Returns how long ago the entry was stored
    pub fn age(&self) -> Duration {
        Utc::now() - self.inserted_at
    }
}

/// Hit/miss counters for a [`FetchCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
}

/// Thread-safe TTL + LRU store of fetch outcomes keyed by URL
///
/// Expiry is lazy: a stale entry is dropped when it is looked up. At capacity,
/// inserting a new key evicts the least recently used entry.
pub struct FetchCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
}

impl FetchCache {
    /// Creates an empty cache
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of live entries
    /// * `ttl` - How long an outcome stays valid
    pub fn new(capacity: NonZeroUsize, ttl: std::time::Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::weeks(52 * 100)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
        }
    }

    /// Looks up a live outcome for `url`
    ///
    /// A hit marks the entry as most recently used. A stale entry is removed
    /// and reported as absent.
    pub fn get(&self, url: &str) -> Option<FetchResult> {
        let mut entries = self.lock();

        match entries.get(url) {
            Some(entry) if !entry.is_stale(self.ttl) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            Some(_) => {}
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        }

        entries.pop(url);
        self.expirations.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores the outcome for `url`, replacing any previous one
    pub fn put(&self, url: &str, result: FetchResult) {
        self.insert_entry(url, CacheEntry::new(result));
    }

    fn insert_entry(&self, url: &str, entry: CacheEntry) {
        if let Some((evicted, _)) = self.lock().push(url.to_string(), entry) {
            if evicted != url {
                tracing::debug!("Evicted least recently used entry: {}", evicted);
            }
        }
    }

    /// Number of entries currently held, including not-yet-collected stale ones
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Drops every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }

    // Each critical section is a single LRU call; a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for FetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCache")
            .field("len", &self.len())
            .field("ttl", &self.ttl)
            .field("stats", &self.stats())
            .finish()
    }
}
