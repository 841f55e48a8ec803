//! Cache Entry Module
//!
//! Defines the structure for individual cached generation results.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached response with its expiration metadata.
///
/// Every entry carries an absolute expiration timestamp computed at
/// insertion time from the store-wide TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload (serialized generation result)
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_seconds` from now.
    ///
    /// The expiry computation saturates, so an absurdly large TTL
    /// degrades to "never expires" instead of overflowing.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is live only while its expiration
    /// time is strictly in the future, so an entry observed exactly at
    /// `expires_at` is already expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds (0 once expired).
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("generated text".to_string(), 60);

        assert_eq!(entry.value, "generated text");
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // 1 second TTL
        let entry = CacheEntry::new("v".to_string(), 1);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("v".to_string(), 10);

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("v".to_string(), 1);

        sleep(Duration::from_millis(1100));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_overflowing() {
        let entry = CacheEntry::new("v".to_string(), u64::MAX);

        assert_eq!(entry.expires_at, u64::MAX);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "v".to_string(),
            created_at: now,
            expires_at: now, // expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
