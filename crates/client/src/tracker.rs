//! Last-request-wins staleness tracking.
//!
//! A lookup driven by keystrokes can resolve out of order. Callers take
//! a token before starting a request and check it before applying the
//! result; a result whose token is no longer current is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the most recent request.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_stays_current() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();
        assert!(tracker.is_current(token));
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let tracker = RequestTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        let c = tracker.begin();
        assert!(a < b && b < c);
    }
}
