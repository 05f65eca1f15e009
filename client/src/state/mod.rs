//! Client-side state models provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each model is a plain struct wrapped in an `RwSignal` by `app::App`, so
//! the transition logic stays testable without a reactive runtime.

pub mod contact;
pub mod route;
pub mod toast;
pub mod ui;
