//! Progressive login lockout
//!
//! Tracks failed login attempts per identifier. Lockout duration
//! escalates at 3, 5 and 10 cumulative failures. An expired lockout
//! does NOT reset the counter; only a successful login clears it, so
//! the tier in effect reflects failures since the last success.

use dashmap::DashMap;

use super::now_millis;

// Lockout durations per tier
const LOCKOUT_30S: i64 = 30 * 1000;
const LOCKOUT_2MIN: i64 = 2 * 60 * 1000;
const LOCKOUT_15MIN: i64 = 15 * 60 * 1000;

/// Outcome of a lockout check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutStatus {
    pub allowed: bool,
    /// Milliseconds until the lockout clears (0 when allowed)
    pub lockout_remaining_ms: i64,
    /// Cumulative failures since the last successful login
    pub failed_attempts: u32,
}

#[derive(Debug)]
struct FailedLoginEntry {
    count: u32,
    lockout_until: i64,
}

/// Failed-login tracker with escalating lockouts
#[derive(Debug, Default)]
pub struct LoginAttemptGuard {
    entries: DashMap<String, FailedLoginEntry>,
}

impl LoginAttemptGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// May the identifier attempt a login right now?
    pub fn check(&self, identifier: &str) -> LockoutStatus {
        self.check_at(identifier, now_millis())
    }

    /// Clock-explicit variant of [`check`](Self::check).
    pub fn check_at(&self, identifier: &str, now_ms: i64) -> LockoutStatus {
        match self.entries.get(identifier) {
            None => LockoutStatus {
                allowed: true,
                lockout_remaining_ms: 0,
                failed_attempts: 0,
            },
            Some(entry) if now_ms < entry.lockout_until => LockoutStatus {
                allowed: false,
                lockout_remaining_ms: entry.lockout_until - now_ms,
                failed_attempts: entry.count,
            },
            // Lockout expired; attempts allowed again but the counter
            // keeps tracking for progressive escalation
            Some(entry) => LockoutStatus {
                allowed: true,
                lockout_remaining_ms: 0,
                failed_attempts: entry.count,
            },
        }
    }

    /// Record a failed attempt, escalating the lockout tier.
    pub fn record_failure(&self, identifier: &str) {
        self.record_failure_at(identifier, now_millis());
    }

    /// Clock-explicit variant of [`record_failure`](Self::record_failure).
    pub fn record_failure_at(&self, identifier: &str, now_ms: i64) {
        let mut entry = self
            .entries
            .entry(identifier.to_string())
            .or_insert_with(|| FailedLoginEntry {
                count: 0,
                lockout_until: 0,
            });

        entry.count += 1;

        // Progressive lockout:
        //   3 failures  -> 30 seconds
        //   5 failures  -> 2 minutes
        //   10+ failures -> 15 minutes
        if entry.count >= 10 {
            entry.lockout_until = now_ms + LOCKOUT_15MIN;
        } else if entry.count >= 5 {
            entry.lockout_until = now_ms + LOCKOUT_2MIN;
        } else if entry.count >= 3 {
            entry.lockout_until = now_ms + LOCKOUT_30S;
        }
    }

    /// Clear the failure record after a successful login.
    pub fn clear(&self, identifier: &str) {
        self.entries.remove(identifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_is_allowed() {
        let guard = LoginAttemptGuard::new();
        let status = guard.check_at("ip-1", 0);
        assert!(status.allowed);
        assert_eq!(status.failed_attempts, 0);
    }

    #[test]
    fn test_two_failures_no_lockout() {
        let guard = LoginAttemptGuard::new();
        guard.record_failure_at("ip-1", 0);
        guard.record_failure_at("ip-1", 0);
        let status = guard.check_at("ip-1", 1);
        assert!(status.allowed);
        assert_eq!(status.failed_attempts, 2);
    }

    #[test]
    fn test_third_failure_locks_for_30s() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..3 {
            guard.record_failure_at("ip-1", 0);
        }
        let status = guard.check_at("ip-1", 1);
        assert!(!status.allowed);
        assert_eq!(status.lockout_remaining_ms, LOCKOUT_30S - 1);
        assert_eq!(status.failed_attempts, 3);

        // Still blocked just before the lockout clears
        assert!(!guard.check_at("ip-1", LOCKOUT_30S - 1).allowed);
        // Clear at the boundary
        assert!(guard.check_at("ip-1", LOCKOUT_30S).allowed);
    }

    #[test]
    fn test_fifth_failure_locks_for_2min() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..5 {
            guard.record_failure_at("ip-1", 0);
        }
        let status = guard.check_at("ip-1", 0);
        assert!(!status.allowed);
        assert_eq!(status.lockout_remaining_ms, LOCKOUT_2MIN);
    }

    #[test]
    fn test_tenth_failure_locks_for_15min() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..10 {
            guard.record_failure_at("ip-1", 0);
        }
        let status = guard.check_at("ip-1", 0);
        assert!(!status.allowed);
        assert_eq!(status.lockout_remaining_ms, LOCKOUT_15MIN);
    }

    #[test]
    fn test_counter_survives_expired_lockout() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..4 {
            guard.record_failure_at("ip-1", 0);
        }
        // 30s lockout from the 3rd/4th failure has expired
        let status = guard.check_at("ip-1", LOCKOUT_30S + 1);
        assert!(status.allowed);
        assert_eq!(status.failed_attempts, 4);

        // The next failure is the 5th overall -> 2 minute tier
        guard.record_failure_at("ip-1", LOCKOUT_30S + 1);
        let status = guard.check_at("ip-1", LOCKOUT_30S + 2);
        assert!(!status.allowed);
        assert_eq!(status.lockout_remaining_ms, LOCKOUT_2MIN - 1);
    }

    #[test]
    fn test_success_resets_to_tier_one() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..5 {
            guard.record_failure_at("ip-1", 0);
        }
        guard.clear("ip-1");

        // Next failure starts back at 1; no lockout until 3 again
        guard.record_failure_at("ip-1", 0);
        let status = guard.check_at("ip-1", 1);
        assert!(status.allowed);
        assert_eq!(status.failed_attempts, 1);
    }

    #[test]
    fn test_identifiers_tracked_independently() {
        let guard = LoginAttemptGuard::new();
        for _ in 0..3 {
            guard.record_failure_at("ip-1", 0);
        }
        assert!(!guard.check_at("ip-1", 1).allowed);
        assert!(guard.check_at("ip-2", 1).allowed);
    }
}
