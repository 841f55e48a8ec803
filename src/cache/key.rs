//! Cache Key Module
//!
//! Deterministic fingerprint for generation requests.

use sha2::{Digest, Sha256};

// == Fingerprint ==
/// Derives the cache key for a generation request.
///
/// Two requests collide exactly when they would produce the same
/// upstream call: same model, prompt and sampling parameters. Each
/// field is fed to the hasher with a separator so that concatenation
/// ambiguity ("ab" + "c" vs "a" + "bc") cannot alias distinct
/// requests. The hex digest keeps keys fixed-size regardless of
/// prompt length.
pub fn fingerprint(model: &str, prompt: &str, max_tokens: u32, temperature: f32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(model.as_bytes());
    hasher.update([0u8]);
    hasher.update(prompt.as_bytes());
    hasher.update([0u8]);
    hasher.update(max_tokens.to_le_bytes());
    hasher.update(temperature.to_le_bytes());
    format!("{:x}", hasher.finalize())
}
