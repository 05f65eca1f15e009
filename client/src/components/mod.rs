//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `layout` owns the persistent chrome and route transitions; the rest are
//! leaf widgets composed by pages.

pub mod animated_section;
pub mod layout;
pub mod page_loader;
pub mod scroll_progress;
pub mod section_header;
pub mod theme_toggle;
pub mod toast;
