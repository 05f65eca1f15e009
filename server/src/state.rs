//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound mailer (absent when delivery is not configured), the
//! contact relay settings, and the submission rate limiter.

use std::sync::Arc;

use crate::config::ContactConfig;
use crate::rate_limit::RateLimiter;
use crate::services::mailer::{Mailer, ResendMailer};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` if `RESEND_API_KEY` is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub contact: Arc<ContactConfig>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn Mailer>>, contact: ContactConfig, rate_limiter: RateLimiter) -> Self {
        Self { mailer, contact: Arc::new(contact), rate_limiter }
    }

    /// Build the production state: a Resend mailer when a key is present.
    #[must_use]
    pub fn from_config(contact: ContactConfig) -> Self {
        let mailer = contact
            .resend_api_key
            .as_deref()
            .map(|key| Arc::new(ResendMailer::new(key)) as Arc<dyn Mailer>);
        Self::new(mailer, contact, RateLimiter::new())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::config::DEFAULT_CONTACT_FROM;
    use crate::rate_limit::RateLimitConfig;
    use crate::services::mailer::OutgoingEmail;

    /// Records every message; optionally fails each send with a fixed error.
    pub struct MockMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
        error: Option<String>,
    }

    impl MockMailer {
        #[must_use]
        pub fn ok() -> Self {
            Self { sent: Mutex::new(Vec::new()), error: None }
        }

        #[must_use]
        pub fn failing(error: &str) -> Self {
            Self { sent: Mutex::new(Vec::new()), error: Some(error.to_owned()) }
        }

        #[must_use]
        pub fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, email: OutgoingEmail) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[must_use]
    pub fn test_contact_config() -> ContactConfig {
        ContactConfig {
            resend_api_key: Some("re_test_key".into()),
            to: Some("owner@example.com".into()),
            from: DEFAULT_CONTACT_FROM.into(),
        }
    }

    /// Default limits, independent of `CONTACT_RATE_LIMIT_*` in the environment.
    #[must_use]
    pub fn test_rate_limiter() -> RateLimiter {
        RateLimiter::with_config(RateLimitConfig::default())
    }

    /// Create a test `AppState` with no mailer configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, test_contact_config(), test_rate_limiter())
    }

    /// Create a test `AppState` with a mock mailer.
    #[must_use]
    pub fn test_app_state_with_mailer(mailer: Arc<dyn Mailer>) -> AppState {
        AppState::new(Some(mailer), test_contact_config(), test_rate_limiter())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
