//! Response Cache Module
//!
//! In-memory TTL store deduplicating identical generation requests.
//! Expired entries are dropped lazily on lookup; a full sweep runs
//! before every stats snapshot and periodically from the background
//! task.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// Key-value store with a single fixed TTL applied at insertion.
///
/// A missing or expired key is a normal outcome, not an error: `get`
/// returns `Option` and no operation here is fallible. The store has
/// no capacity bound; the expected key space (one fingerprint per
/// distinct generation request) is small.
#[derive(Debug)]
pub struct ResponseCache {
    /// Fingerprint -> cached response
    entries: HashMap<String, CacheEntry>,
    /// Lifetime applied to every inserted entry, in seconds
    ttl_seconds: u64,
    /// Successful lookups
    hits: u64,
    /// Lookups that found nothing (absent or expired)
    misses: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_seconds,
            hits: 0,
            misses: 0,
        }
    }

    // == Get ==
    /// Returns the cached value for `key` if present and unexpired.
    ///
    /// A found-but-expired entry is removed on the spot and reported
    /// as absent. Callers receive a copy of the value; the store keeps
    /// exclusive ownership of its entries.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.misses += 1;
                return None;
            }

            let value = entry.value.clone();
            self.hits += 1;
            return Some(value);
        }

        self.misses += 1;
        None
    }

    // == Set ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// Overwriting resets the TTL window entirely. The in-memory store
    /// always succeeds; the boolean return keeps the contract uniform
    /// with a networked backend that can fail.
    pub fn set(&mut self, key: String, value: String) -> bool {
        let entry = CacheEntry::new(value, self.ttl_seconds);
        self.entries.insert(key, entry);
        true
    }

    // == Delete ==
    /// Removes the entry for `key`, returning whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Ping ==
    /// Liveness probe. Always true for the in-process store; a
    /// networked backend would report reachability here.
    pub fn ping(&self) -> bool {
        true
    }

    // == Stats ==
    /// Sweeps expired entries, then returns a snapshot.
    ///
    /// Sweeping first guarantees the reported count never includes an
    /// entry whose expiration has already passed.
    pub fn stats(&mut self) -> CacheStats {
        self.sweep_expired();
        CacheStats {
            backend: "memory",
            entries: self.entries.len(),
            ttl_seconds: self.ttl_seconds,
            hits: self.hits,
            misses: self.misses,
        }
    }

    // == Sweep Expired ==
    /// Removes every expired entry in one O(n) scan.
    ///
    /// Returns the number of entries removed. Lazy expiry on `get`
    /// already keeps reads correct; the sweep just reclaims memory.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store-wide TTL in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}
