//! Nonce and timestamp generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Source of `(oauth_nonce, oauth_timestamp)` pairs.
///
/// The signer requests a fresh pair for every signing call.
/// Implementations must guarantee that no two concurrent calls observe
/// the same pair within the provider's replay window.
pub trait NonceProvider {
    fn next(&self) -> (String, String);
}

/// Production source: wall clock, a random token and an atomic sequence
/// number. Two calls within the same second still yield distinct nonces.
#[derive(Debug, Default)]
pub struct SystemNonce {
    sequence: AtomicU64,
}

impl SystemNonce {
    pub fn new() -> Self {
        Default::default()
    }
}

impl NonceProvider for SystemNonce {
    fn next(&self) -> (String, String) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            .to_string();
        let random: u32 = rand::thread_rng().gen();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let nonce = format!("{}{:08x}{:x}", timestamp, random, sequence);
        (nonce, timestamp)
    }
}

/// Fixed source, for deterministic output.
///
/// Use it to reproduce a provider's documented signing example or to
/// make test assertions byte-exact. Never use it in production: a reused
/// nonce/timestamp pair is rejected as a replay.
#[derive(Debug, Clone)]
pub struct FixedNonce {
    nonce: String,
    timestamp: String,
}

impl FixedNonce {
    pub fn new<TNonce, TTimestamp>(nonce: TNonce, timestamp: TTimestamp) -> Self
    where
        TNonce: Into<String>,
        TTimestamp: Into<String>,
    {
        FixedNonce {
            nonce: nonce.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl NonceProvider for FixedNonce {
    fn next(&self) -> (String, String) {
        (self.nonce.clone(), self.timestamp.clone())
    }
}
