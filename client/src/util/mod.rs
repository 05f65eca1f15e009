//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod transition;
