//! Play-once reveal tracking for scroll-triggered sections.
//!
//! The browser side attaches an `IntersectionObserver` to each animated
//! section and feeds every entry through [`RevealState::observe`]. Only the
//! first intersection flips the section to revealed; the observer is then
//! disconnected, and later scroll-ins for the same element never replay.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Root margin for sections: trigger once 50px of the element is in view.
pub const SECTION_ROOT_MARGIN: &str = "-50px";

/// Whether animated content starts in its revealed frame. Only the browser
/// build runs the observers and frame callbacks that reveal it later.
#[must_use]
pub const fn starts_revealed() -> bool {
    !cfg!(feature = "hydrate")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one observation. Returns `true` only on the transition to
    /// revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Keeps an observer and its callback alive. Dropping it disconnects the
/// observer and frees the callback, so an unmounted section stops being
/// watched.
#[cfg(feature = "hydrate")]
pub struct RevealGuard {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl Drop for RevealGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `element` and invoke `on_reveal` the first time it enters the
/// viewport. The observer lives as long as the returned guard.
/// Environments without `IntersectionObserver` reveal at once and return
/// `None`.
#[cfg(feature = "hydrate")]
pub fn observe_once(element: &web_sys::Element, root_margin: &str, on_reveal: impl Fn() + 'static) -> Option<RevealGuard> {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let on_reveal = Rc::new(on_reveal);
    let reveal = Rc::clone(&on_reveal);
    let state = Rc::new(Cell::new(RevealState::default()));
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let mut current = state.get();
                if current.observe(entry.is_intersecting()) {
                    state.set(current);
                    observer.disconnect();
                    reveal();
                    return;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(RevealGuard { observer, _callback: callback })
        }
        Err(_) => {
            log::warn!("IntersectionObserver unavailable; revealing section immediately");
            drop(callback);
            on_reveal();
            None
        }
    }
}
