//! Contact route: `POST /api/send-contact-email`.
//!
//! Every failure answers with `{success:false, error}` so the browser can
//! show the message verbatim. Validation and delivery problems are 500,
//! throttled senders get 429. A submission that never reaches the provider
//! does not count against the sender.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::contact::{self as contact_svc, ContactError, ContactRequest};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn ok() -> Self {
        Self { success: true, error: None }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }
}

type ContactReply = (StatusCode, Json<ContactResponse>);

fn failure(status: StatusCode, error: impl Into<String>) -> ContactReply {
    (status, Json(ContactResponse::failed(error)))
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingFields
        | ContactError::InvalidEmail
        | ContactError::NotConfigured
        | ContactError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/send-contact-email`: validate, throttle, relay.
pub async fn send_contact_email(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactReply {
    let Json(body) = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "contact: malformed request body");
            return failure(StatusCode::INTERNAL_SERVER_ERROR, e.body_text());
        }
    };

    let req = match contact_svc::validate_request(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "contact: rejected submission");
            return failure(contact_error_to_status(&e), e.to_string());
        }
    };

    let reservation = match state.rate_limiter.check_and_record(&req.email) {
        Ok(reservation) => reservation,
        Err(e) => {
            tracing::warn!(error = %e, "contact: rate limited");
            return failure(StatusCode::TOO_MANY_REQUESTS, e.to_string());
        }
    };

    tracing::info!(name = %req.name, email = %req.email, "contact: sending email");
    match contact_svc::send_contact_email(state.mailer.as_deref(), &state.contact, &req).await {
        Ok(()) => {
            tracing::info!(email = %req.email, "contact: email sent");
            (StatusCode::OK, Json(ContactResponse::ok()))
        }
        Err(e) => {
            tracing::error!(error = %e, "contact: delivery failed");
            // Nothing went out, so the attempt does not count against the sender.
            state.rate_limiter.release(&reservation);
            failure(contact_error_to_status(&e), e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
