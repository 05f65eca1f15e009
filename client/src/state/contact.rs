//! Contact form state and submission orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact page owns one `ContactState` signal. `begin_submit` is the
//! only gate to the network: it validates the fields and flips the status to
//! `Submitting`, which doubles as the mutual-exclusion flag that keeps a
//! second click from sending a duplicate message.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach a channel. Delivery failures keep the
//! entered values so the visitor can resubmit by hand; there are no retries.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::net::contact::ContactChannel;
use crate::net::types::ContactRequest;
use crate::state::toast::ToastKind;

pub const SUCCESS_TITLE: &str = "Message sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const FAILURE_TITLE: &str = "Message not sent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingField(ContactField),
    InvalidEmail,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required.", field.label()),
            Self::InvalidEmail => f.write_str("Enter a valid email address."),
        }
    }
}

/// Basic address shape: `local@domain.tld`, no whitespace, a single `@`,
/// and a dot with at least one character on each side in the domain.
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
    let mut inner = domain.chars();
    if inner.next().is_none() || inner.next_back().is_none() {
        return false;
    }
    inner.as_str().contains('.')
}

/// Trim and validate the form into a request.
///
/// # Errors
///
/// Returns the first missing field in form order, or `InvalidEmail`.
pub fn validate(fields: &ContactFields) -> Result<ContactRequest, ContactValidationError> {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        if fields.get(field).trim().is_empty() {
            return Err(ContactValidationError::MissingField(field));
        }
    }
    let email = fields.email.trim();
    if !is_valid_email(email) {
        return Err(ContactValidationError::InvalidEmail);
    }
    Ok(ContactRequest {
        name: fields.name.trim().to_owned(),
        email: email.to_owned(),
        message: fields.message.trim().to_owned(),
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// Why `begin_submit` refused to start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(ContactValidationError),
}

#[derive(Clone, Debug, Default)]
pub struct ContactState {
    pub fields: ContactFields,
    pub status: SubmitStatus,
}

impl ContactState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Validate and claim the submit slot.
    ///
    /// # Errors
    ///
    /// `InFlight` while a request is outstanding; `Invalid` when the fields
    /// fail validation. Neither case changes the current status.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        let request = validate(&self.fields).map_err(SubmitBlocked::Invalid)?;
        self.status = SubmitStatus::Submitting;
        Ok(request)
    }

    /// Record the channel result. Success discards the entered values.
    pub fn finish(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Submitted;
            }
            Err(message) => self.status = SubmitStatus::Failed(message),
        }
    }

    /// Return from the confirmation view to an empty form.
    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
        self.status = SubmitStatus::Idle;
    }
}

/// Toast content for a finished submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactNotice {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: String,
}

#[must_use]
pub fn notice_for(result: &Result<(), String>) -> ContactNotice {
    match result {
        Ok(()) => ContactNotice {
            kind: ToastKind::Success,
            title: SUCCESS_TITLE,
            description: SUCCESS_DESCRIPTION.to_owned(),
        },
        Err(message) => ContactNotice { kind: ToastKind::Error, title: FAILURE_TITLE, description: message.clone() },
    }
}

/// Record a finished attempt and return the toast to show for it.
pub fn complete(state: &mut ContactState, result: Result<(), String>) -> ContactNotice {
    let notice = notice_for(&result);
    state.finish(result);
    notice
}

/// Run one full attempt against `channel`.
///
/// # Errors
///
/// Returns `SubmitBlocked` without calling the channel when the form is
/// invalid or already submitting.
pub async fn submit_with<C: ContactChannel>(
    state: &mut ContactState,
    channel: &C,
) -> Result<ContactNotice, SubmitBlocked> {
    let request = state.begin_submit()?;
    let result = channel.send(&request).await;
    Ok(complete(state, result))
}
