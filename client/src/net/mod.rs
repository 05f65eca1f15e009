//! Networking modules for the contact-submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema shared with the server endpoint and
//! `contact` holds the submission channels the contact page can drive.

pub mod contact;
pub mod types;
