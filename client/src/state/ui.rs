//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so layout
//! controls can evolve independently of the views they wrap.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_nav_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn toggle_mobile_nav(&mut self) {
        self.mobile_nav_open = !self.mobile_nav_open;
    }

    /// Navigating away always collapses the mobile menu.
    pub fn on_navigate(&mut self) {
        self.mobile_nav_open = false;
    }
}
