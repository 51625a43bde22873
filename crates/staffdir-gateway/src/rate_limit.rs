//! Sliding-window rate limiting for the search endpoint.
//!
//! Each key keeps the timestamps of its admitted requests inside the trailing
//! window `(now - window, now]`. A request is admitted while fewer than
//! `max_requests` timestamps remain after eviction.
//!
//! ## Keys
//!
//! - `org:<org_id>` when the request names an organization
//! - `ip:<address>` otherwise, from the first `X-Forwarded-For` entry, then
//!   the peer address, then the literal `unknown`
//!
//! ## Response Headers
//!
//! Admitted requests carry `X-RateLimit-Limit` and `X-RateLimit-Remaining`.
//! Denied requests get `429 Too Many Requests` with `Retry-After` set to the
//! window length in seconds.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};

/// Header carrying the proxy chain of client addresses.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The request was admitted and recorded.
    Allowed {
        /// Requests still available to this key in the current window.
        remaining: u32,
    },
    /// The window is full; nothing was recorded.
    Denied {
        /// How long the client should wait before retrying.
        retry_after: Duration,
    },
}

impl Admission {
    /// Whether the request was admitted.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Per-key sliding-window limiter.
///
/// All keys share one mutex. Eviction, the capacity check and the append
/// happen under a single acquisition, so concurrent callers on one key can
/// never be admitted past `max_requests`.
#[derive(Debug)]
pub struct SlidingWindowLimiter<C: Clock = SystemClock> {
    max_requests: u32,
    window: Duration,
    clock: C,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl SlidingWindowLimiter<SystemClock> {
    /// Create a limiter on the system clock.
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_clock(max_requests, window, SystemClock)
    }
}

impl<C: Clock> SlidingWindowLimiter<C> {
    /// Create a limiter on a specific clock.
    #[must_use]
    pub fn with_clock(max_requests: u32, window: Duration, clock: C) -> Self {
        Self {
            max_requests,
            window,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Check and, if admitted, record a request for `key`.
    pub fn check(&self, key: &str) -> Admission {
        let now = self.clock.now();
        let capacity = usize::try_from(self.max_requests).unwrap_or(usize::MAX);

        let mut windows = self.windows.lock();
        let timestamps = windows.entry(key.to_string()).or_default();

        while timestamps
            .front()
            .is_some_and(|&t| now.saturating_duration_since(t) >= self.window)
        {
            timestamps.pop_front();
        }

        if timestamps.len() >= capacity {
            return Admission::Denied {
                retry_after: self.window,
            };
        }

        timestamps.push_back(now);
        let remaining = capacity - timestamps.len();
        Admission::Allowed {
            remaining: u32::try_from(remaining).unwrap_or(u32::MAX),
        }
    }

    /// Whether a request for `key` is admitted. Records it if so.
    pub fn allow(&self, key: &str) -> bool {
        self.check(key).is_allowed()
    }

    /// Configured requests per window.
    #[must_use]
    pub const fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Configured window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Number of keys currently tracked.
    ///
    /// Keys are never removed, so this only grows.
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.windows.lock().len()
    }
}

/// Rate-limit key derived from a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateLimitKey(String);

impl RateLimitKey {
    /// Derive the key for a request.
    ///
    /// A non-empty `org_id` wins. Otherwise the client address is taken from
    /// the first `X-Forwarded-For` entry, then `peer`, then `unknown`.
    #[must_use]
    pub fn resolve(org_id: Option<&str>, headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        if let Some(org_id) = org_id.filter(|id| !id.is_empty()) {
            return Self(format!("org:{org_id}"));
        }

        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string);

        let client = forwarded
            .or_else(|| peer.map(|addr| addr.ip().to_string()))
            .unwrap_or_else(|| "unknown".to_string());

        Self(format!("ip:{client}"))
    }

    /// The key as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateLimitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use axum::http::HeaderValue;
    use std::sync::Barrier;

    fn limiter(max: u32, window_secs: u64) -> (SlidingWindowLimiter<ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let limiter =
            SlidingWindowLimiter::with_clock(max, Duration::from_secs(window_secs), clock.clone());
        (limiter, clock)
    }

    #[test]
    fn admits_up_to_max_then_denies() {
        let (limiter, _clock) = limiter(2, 60);

        assert_eq!(limiter.check("org:a"), Admission::Allowed { remaining: 1 });
        assert_eq!(limiter.check("org:a"), Admission::Allowed { remaining: 0 });
        assert_eq!(
            limiter.check("org:a"),
            Admission::Denied {
                retry_after: Duration::from_secs(60)
            }
        );
    }

    #[test]
    fn denial_is_not_recorded() {
        let (limiter, clock) = limiter(1, 10);

        assert!(limiter.allow("k"));
        clock.advance(Duration::from_secs(5));
        assert!(!limiter.allow("k"));
        clock.advance(Duration::from_secs(5));
        // Only the first request was recorded, and it has now aged out.
        assert!(limiter.allow("k"));
    }

    #[test]
    fn window_reopens_after_full_window() {
        let (limiter, clock) = limiter(2, 60);

        assert!(limiter.allow("org:a"));
        assert!(limiter.allow("org:a"));
        assert!(!limiter.allow("org:a"));

        clock.advance(Duration::from_secs(59));
        assert!(!limiter.allow("org:a"));

        clock.advance(Duration::from_secs(1));
        assert!(limiter.allow("org:a"));
    }

    #[test]
    fn timestamp_at_cutoff_is_evicted() {
        let (limiter, clock) = limiter(1, 60);

        assert!(limiter.allow("k"));
        clock.advance(Duration::from_secs(60));
        assert!(limiter.allow("k"));
    }

    #[test]
    fn sliding_not_fixed_buckets() {
        let (limiter, clock) = limiter(2, 60);

        assert!(limiter.allow("k"));
        clock.advance(Duration::from_secs(30));
        assert!(limiter.allow("k"));
        clock.advance(Duration::from_secs(30));
        // First request left the window, second is still inside it.
        assert_eq!(limiter.check("k"), Admission::Allowed { remaining: 0 });
        assert!(!limiter.allow("k"));
    }

    #[test]
    fn keys_are_isolated() {
        let (limiter, _clock) = limiter(2, 60);

        assert!(limiter.allow("org:a"));
        assert!(limiter.allow("org:a"));
        assert!(!limiter.allow("org:a"));

        assert!(limiter.allow("org:b"));
        assert!(limiter.allow("ip:10.0.0.1"));
        assert_eq!(limiter.tracked_keys(), 3);
    }

    #[test]
    fn zero_capacity_denies_everything() {
        let (limiter, _clock) = limiter(0, 60);
        assert!(!limiter.allow("k"));
    }

    #[test]
    fn concurrent_burst_never_overshoots() {
        const MAX: u32 = 5;
        const CALLERS: usize = 32;

        let (limiter, _clock) = limiter(MAX, 60);
        let barrier = Barrier::new(CALLERS);

        let admitted = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        limiter.allow("org:burst")
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|allowed| *allowed)
                .count()
        });

        assert_eq!(admitted, MAX as usize);
    }

    #[test]
    fn burst_of_max_plus_one() {
        let (limiter, _clock) = limiter(2, 60);
        let barrier = Barrier::new(3);

        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..3)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        limiter.allow("org:a")
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|a| **a).count(), 2);
        assert_eq!(results.iter().filter(|a| !**a).count(), 1);
    }

    #[test]
    fn key_prefers_org() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("1.2.3.4"));
        let key = RateLimitKey::resolve(Some("org_a"), &headers, None);
        assert_eq!(key.as_str(), "org:org_a");
    }

    #[test]
    fn key_uses_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );
        let peer: SocketAddr = "127.0.0.1:9000".parse().unwrap();

        let key = RateLimitKey::resolve(None, &headers, Some(peer));
        assert_eq!(key.as_str(), "ip:203.0.113.7");
    }

    #[test]
    fn key_falls_back_to_peer_then_unknown() {
        let headers = HeaderMap::new();
        let peer: SocketAddr = "192.0.2.10:4321".parse().unwrap();

        assert_eq!(
            RateLimitKey::resolve(Some(""), &headers, Some(peer)).as_str(),
            "ip:192.0.2.10"
        );
        assert_eq!(
            RateLimitKey::resolve(None, &headers, None).to_string(),
            "ip:unknown"
        );
    }
}
