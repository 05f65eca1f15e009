//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and provider plumbing so route handlers
//! can stay focused on protocol translation.

pub mod contact;
pub mod mailer;
