//! Process configuration read from the environment.
//!
//! `.env` is loaded by `main` before anything here runs, so every value can
//! come from either source. Only `PORT` is validated strictly; the contact
//! relay degrades to "not configured" when its keys are missing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_FROM: &str = "Contact Form <onboarding@resend.dev>";
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

/// Contact relay settings. The provider key is held here and nowhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactConfig {
    pub resend_api_key: Option<String>,
    /// Inbox that receives submissions.
    pub to: Option<String>,
    pub from: String,
}

impl ContactConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            resend_api_key: env_string("RESEND_API_KEY"),
            to: env_string("CONTACT_TO"),
            from: env_string("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_owned()),
        }
    }

    /// Delivery needs both a provider key and a recipient.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.resend_api_key.is_some() && self.to.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_allow_origin: String,
    pub contact: ContactConfig,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env_string("PORT").as_deref())?,
            cors_allow_origin: env_string("CORS_ALLOW_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOW_ORIGIN.to_owned()),
            contact: ContactConfig::from_env(),
        })
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

/// Trimmed env var; blank counts as unset.
pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
