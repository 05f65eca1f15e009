//! Outbound transactional email.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`Mailer`] trait rather than on Resend directly so
//! route tests can swap in a recording mock. [`ResendMailer`] is the only
//! production implementation; the API key never leaves this process.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

/// One message ready for the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Provider-neutral async trait for sending email. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Hand one message to the provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's error text when the message is rejected or the
    /// request cannot be made.
    async fn send(&self, email: OutgoingEmail) -> Result<(), String>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self { client: Resend::new(api_key) }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), String> {
        let to = [email.to.as_str()];
        let options = CreateEmailBaseOptions::new(&email.from, to, &email.subject)
            .with_html(&email.html)
            .with_reply(&email.reply_to);

        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| e.to_string())?;
        tracing::debug!(to = %email.to, "contact email accepted by provider");
        Ok(())
    }
}
