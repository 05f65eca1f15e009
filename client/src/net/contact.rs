//! Contact submission channels.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Channels return `Result<(), String>` instead of panicking so a failed
//! delivery degrades to an error toast with the form left editable. The
//! message is either the server's `error` text or [`GENERIC_FAILURE`];
//! transport and decoding details go to the console log only.
//! Provider credentials never reach this crate; the server relays mail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::types::ContactRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ContactResponse;

/// Server endpoint that relays contact messages to the site owner.
pub const CONTACT_ENDPOINT: &str = "/api/send-contact-email";

/// Message shown when the provider gives no usable error text.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Delay used by [`SimulatedChannel`].
pub const SIMULATED_DELAY_MS: u32 = 1000;

/// Map an endpoint reply to the visitor-facing result. `body` is `None`
/// when the reply was not a `{success, error}` envelope.
#[cfg(any(test, feature = "hydrate"))]
fn settle_response(ok: bool, body: Option<ContactResponse>) -> Result<(), String> {
    match body {
        Some(body) => body.into_result(GENERIC_FAILURE),
        None if ok => Ok(()),
        None => Err(GENERIC_FAILURE.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
fn transport_failure(err: &gloo_net::Error) -> String {
    log::error!("contact request failed before a reply: {err}");
    GENERIC_FAILURE.to_owned()
}

/// A single outbound delivery mechanism for contact messages.
#[allow(async_fn_in_trait)]
pub trait ContactChannel {
    /// Deliver one message. Exactly one attempt; no retries.
    ///
    /// # Errors
    ///
    /// Returns a user-presentable message when delivery fails.
    async fn send(&self, request: &ContactRequest) -> Result<(), String>;
}

/// Posts the message to the server's contact endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpChannel;

impl ContactChannel for HttpChannel {
    async fn send(&self, request: &ContactRequest) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
                .json(request)
                .map_err(|e| transport_failure(&e))?
                .send()
                .await
                .map_err(|e| transport_failure(&e))?;
            // Failure bodies still carry `{success, error}`.
            let body = match resp.json::<ContactResponse>().await {
                Ok(body) => Some(body),
                Err(e) => {
                    log::error!("contact reply {} was not an envelope: {e}", resp.status());
                    None
                }
            };
            settle_response(resp.ok(), body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

/// Stand-in channel that waits briefly and always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedChannel {
    pub delay_ms: u32,
}

impl Default for SimulatedChannel {
    fn default() -> Self {
        Self { delay_ms: SIMULATED_DELAY_MS }
    }
}

impl ContactChannel for SimulatedChannel {
    async fn send(&self, request: &ContactRequest) -> Result<(), String> {
        let _ = request;
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Channel the contact page submits through, fixed at build time.
///
/// `PORTFOLIO_CONTACT_CHANNEL=simulated` selects [`SimulatedChannel`] for
/// demo deployments without a mail provider; anything else posts to the
/// server.
#[derive(Clone, Copy, Debug)]
pub enum SiteChannel {
    Http(HttpChannel),
    Simulated(SimulatedChannel),
}

impl SiteChannel {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_name(option_env!("PORTFOLIO_CONTACT_CHANNEL"))
    }

    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("simulated") => Self::Simulated(SimulatedChannel::default()),
            _ => Self::Http(HttpChannel),
        }
    }
}

impl ContactChannel for SiteChannel {
    async fn send(&self, request: &ContactRequest) -> Result<(), String> {
        match self {
            Self::Http(c) => c.send(request).await,
            Self::Simulated(c) => c.send(request).await,
        }
    }
}
