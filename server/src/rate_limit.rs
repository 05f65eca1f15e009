//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits are enforced before anything is handed to the email provider:
//! - Per-sender: 3 submissions per 10 minutes, keyed by the lowercased
//!   submitter address
//! - Global: 30 submissions per hour across all senders
//!
//! Limits are only recorded for requests that pass validation, so a typo in
//! the form never burns the sender's quota. A recorded submission that the
//! provider then fails to deliver is handed back with [`RateLimiter::release`],
//! so a visitor can retry after a provider error.
//!
//! TRADE-OFFS
//! ==========
//! The per-sender key is the address the visitor typed, which they control.
//! It stops accidental repeat submissions, not a determined sender who
//! rotates addresses; the global window is the only hard bound on outbound
//! mail.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::env_parse;

const DEFAULT_PER_SENDER_LIMIT: usize = 3;
const DEFAULT_PER_SENDER_WINDOW_SECS: u64 = 600;

const DEFAULT_GLOBAL_LIMIT: usize = 30;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 3600;

#[derive(Clone, Copy, Debug)]
pub(crate) struct RateLimitConfig {
    per_sender_limit: usize,
    per_sender_window: Duration,
    global_limit: usize,
    global_window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        let per_sender_window_secs = env_parse("CONTACT_RATE_LIMIT_PER_SENDER_WINDOW_SECS", DEFAULT_PER_SENDER_WINDOW_SECS);
        let global_window_secs = env_parse("CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS", DEFAULT_GLOBAL_WINDOW_SECS);

        Self {
            per_sender_limit: env_parse("CONTACT_RATE_LIMIT_PER_SENDER", DEFAULT_PER_SENDER_LIMIT),
            per_sender_window: Duration::from_secs(per_sender_window_secs),
            global_limit: env_parse("CONTACT_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(global_window_secs),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_sender_limit: DEFAULT_PER_SENDER_LIMIT,
            per_sender_window: Duration::from_secs(DEFAULT_PER_SENDER_WINDOW_SECS),
            global_limit: DEFAULT_GLOBAL_LIMIT,
            global_window: Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS),
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("too many messages from this sender (max {limit} per {window_secs}s)")]
    PerSenderExceeded { limit: usize, window_secs: u64 },
    #[error("contact form is temporarily busy (max {limit} messages per {window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

/// One recorded submission, returned so it can be released if delivery fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    sender: String,
    at: Instant,
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-sender submission timestamps.
    sender_requests: HashMap<String, VecDeque<Instant>>,
    /// Global submission timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::from_env())
    }

    pub(crate) fn with_config(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both per-sender and global limits, then record the submission.
    pub fn check_and_record(&self, sender: &str) -> Result<Reservation, RateLimitError> {
        self.check_and_record_at(sender, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, sender: &str, now: Instant) -> Result<Reservation, RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let key = sender.trim().to_ascii_lowercase();
        let sender_deque = inner.sender_requests.entry(key.clone()).or_default();
        prune_window(sender_deque, now, cfg.per_sender_window);
        if sender_deque.len() >= cfg.per_sender_limit {
            return Err(RateLimitError::PerSenderExceeded {
                limit: cfg.per_sender_limit,
                window_secs: cfg.per_sender_window.as_secs(),
            });
        }

        sender_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Drop senders whose windows have fully drained.
        inner.sender_requests.retain(|_, deque| !deque.is_empty());

        Ok(Reservation { sender: key, at: now })
    }

    /// Hand back a submission that was recorded but never delivered.
    pub fn release(&self, reservation: &Reservation) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        remove_one(&mut inner.global_requests, reservation.at);
        if let Some(deque) = inner.sender_requests.get_mut(&reservation.sender) {
            remove_one(deque, reservation.at);
            if deque.is_empty() {
                inner.sender_requests.remove(&reservation.sender);
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

fn remove_one(deque: &mut VecDeque<Instant>, at: Instant) {
    if let Some(pos) = deque.iter().rposition(|&t| t == at) {
        deque.remove(pos);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
