//! Wire types for `POST /api/send-contact-email`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Validated contact payload sent to the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response envelope returned by the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    /// Collapse the envelope into a `Result`, using `fallback` when the
    /// server reported failure without a message.
    ///
    /// # Errors
    ///
    /// Returns the provider error (or `fallback`) when `success` is false.
    pub fn into_result(self, fallback: &str) -> Result<(), String> {
        if self.success {
            return Ok(());
        }
        Err(self
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned()))
    }
}
