//! Fixed-window rate limiter
//!
//! One counter per identifier. The first request opens a window of
//! `window_ms` allowing `max_requests`; requests beyond the cap are
//! rejected with the time until the window clears; a new window begins
//! once the previous reset time is reached.
//!
//! Expired entries are pruned opportunistically once the store exceeds a
//! soft threshold. The bound is soft: between prunes the store can grow
//! past it.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use super::now_millis;

/// Soft bound on tracked identifiers before a prune pass runs
const PRUNE_THRESHOLD: usize = 10_000;

/// Window parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_ms: i64,
}

/// Outcome of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// Requests left in the current window
    pub remaining: u32,
    /// Milliseconds until the current window clears
    pub reset_in_ms: i64,
}

impl RateLimitDecision {
    /// Seconds to advertise in `retryAfter`, rounded up
    pub fn retry_after_secs(&self) -> u64 {
        (self.reset_in_ms.max(0) as u64).div_ceil(1000)
    }
}

#[derive(Debug)]
struct WindowEntry {
    count: u32,
    reset_time: i64,
}

/// Fixed-window rate limiter keyed by identifier
#[derive(Debug, Default)]
pub struct RateLimiter {
    entries: DashMap<String, WindowEntry>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request against the identifier's current window.
    pub fn check(&self, identifier: &str, config: RateLimitConfig) -> RateLimitDecision {
        self.check_at(identifier, config, now_millis())
    }

    /// Clock-explicit variant of [`check`](Self::check).
    pub fn check_at(
        &self,
        identifier: &str,
        config: RateLimitConfig,
        now_ms: i64,
    ) -> RateLimitDecision {
        // Prune before taking the entry lock; retain would deadlock
        // against a held entry guard on the same shard.
        if self.entries.len() > PRUNE_THRESHOLD {
            self.entries.retain(|_, entry| now_ms < entry.reset_time);
        }

        let mut entry = self
            .entries
            .entry(identifier.to_string())
            .or_insert_with(|| WindowEntry {
                count: 0,
                reset_time: now_ms + config.window_ms,
            });

        // Window boundary reached: start a fresh window
        if now_ms >= entry.reset_time {
            entry.count = 0;
            entry.reset_time = now_ms + config.window_ms;
        }

        if entry.count >= config.max_requests {
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_in_ms: entry.reset_time - now_ms,
            };
        }

        entry.count += 1;
        RateLimitDecision {
            allowed: true,
            remaining: config.max_requests - entry.count,
            reset_in_ms: entry.reset_time - now_ms,
        }
    }

    /// Number of tracked identifiers (soft-bounded)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
