//! Document scroll progress for the header progress bar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
/// Documents shorter than the viewport report `0`.
#[must_use]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Current progress read from the live document.
#[cfg(feature = "hydrate")]
pub fn read_document_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let top = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    scroll_progress(top, f64::from(root.scroll_height()), viewport)
}
