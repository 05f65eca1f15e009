//! Contact form relay.
//!
//! Validates a submission, renders it into the notification template, and
//! hands it to a [`Mailer`] addressed to the site owner with `Reply-To` set
//! to the submitter.

use serde::Deserialize;

use crate::config::ContactConfig;
use crate::services::mailer::{Mailer, OutgoingEmail};

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Body of `POST /api/send-contact-email`. Absent fields deserialize as
/// empty so they fail validation instead of extraction.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot inside the
/// domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Trim every field and check presence and email shape.
///
/// # Errors
///
/// [`ContactError::MissingFields`] if any field is blank,
/// [`ContactError::InvalidEmail`] if the address is malformed.
pub fn validate_request(req: &ContactRequest) -> Result<ContactRequest, ContactError> {
    let cleaned = ContactRequest {
        name: req.name.trim().to_owned(),
        email: req.email.trim().to_owned(),
        message: req.message.trim().to_owned(),
    };
    if cleaned.name.is_empty() || cleaned.email.is_empty() || cleaned.message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(&cleaned.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(cleaned)
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn subject_for(name: &str) -> String {
    format!("Portfolio Contact: {name}")
}

/// Fill the notification template. Every field is escaped; message line
/// breaks become `<br>`.
#[must_use]
pub fn render_contact_email(req: &ContactRequest) -> String {
    let name = escape_html(&req.name);
    let email = escape_html(&req.email);
    let message = escape_html(&req.message).replace("\r\n", "\n").replace('\n', "<br>");
    fill_template(CONTACT_EMAIL_TEMPLATE, |key| match key {
        "NAME" => Some(name.as_str()),
        "EMAIL" => Some(email.as_str()),
        "MESSAGE" => Some(message.as_str()),
        _ => None,
    })
}

/// Substitute `{{KEY}}` placeholders in a single left-to-right scan.
/// Substituted values are never rescanned, so text that looks like a
/// placeholder inside a value is emitted verbatim. Unknown keys are kept.
pub(crate) fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Validate and relay one submission.
///
/// # Errors
///
/// Validation errors as in [`validate_request`];
/// [`ContactError::NotConfigured`] without a mailer or recipient;
/// [`ContactError::Delivery`] with the provider's message when sending fails.
pub async fn send_contact_email(
    mailer: Option<&dyn Mailer>,
    cfg: &ContactConfig,
    req: &ContactRequest,
) -> Result<(), ContactError> {
    let req = validate_request(req)?;
    let (Some(mailer), Some(to)) = (mailer, cfg.to.as_deref()) else {
        return Err(ContactError::NotConfigured);
    };

    let email = OutgoingEmail {
        from: cfg.from.clone(),
        to: to.to_owned(),
        reply_to: req.email.clone(),
        subject: subject_for(&req.name),
        html: render_contact_email(&req),
    };
    mailer.send(email).await.map_err(ContactError::Delivery)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
