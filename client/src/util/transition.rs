//! Route-change transition and loading-overlay sequencing.
//!
//! DESIGN
//! ======
//! A navigation bumps `seq`, starts the outgoing view's exit, and raises the
//! route loader. Timers scheduled by the view layer report back with the
//! sequence they were started under; completions carrying an older sequence
//! are dropped. Rapid navigation therefore interrupts the earlier transition
//! without any cancellation plumbing, and only the latest path is ever
//! mounted.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Startup overlay duration.
pub const INITIAL_LOADER_MS: u32 = 800;
/// Overlay duration after each route change.
pub const ROUTE_LOADER_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Incoming view is playing its enter animation.
    #[default]
    Entering,
    /// Incoming view is at rest.
    Entered,
    /// Outgoing view is playing its exit animation.
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderState {
    pub initial_visible: bool,
    pub route_visible: bool,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self { initial_visible: true, route_visible: false }
    }
}

impl LoaderState {
    #[must_use]
    pub fn visible(&self) -> bool {
        self.initial_visible || self.route_visible
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    /// Path of the view currently mounted.
    pub path: String,
    /// Path waiting for the exit animation to finish.
    pub pending: Option<String>,
    pub phase: TransitionPhase,
    pub seq: u64,
    pub loader: LoaderState,
}

impl TransitionState {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            pending: None,
            phase: TransitionPhase::Entering,
            seq: 0,
            loader: LoaderState::default(),
        }
    }

    /// Begin a transition to `path`. Returns the new sequence, or `None`
    /// when `path` is already the mounted or pending destination.
    pub fn navigate(&mut self, path: &str) -> Option<u64> {
        let target = self.pending.as_deref().unwrap_or(&self.path);
        if target == path {
            return None;
        }
        self.seq += 1;
        self.pending = Some(path.to_owned());
        self.phase = TransitionPhase::Exiting;
        self.loader.route_visible = true;
        Some(self.seq)
    }

    /// Exit animation finished: mount the pending view and start entering.
    /// Returns `false` for stale or redundant completions.
    pub fn exit_complete(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.phase != TransitionPhase::Exiting {
            return false;
        }
        let Some(next) = self.pending.take() else {
            return false;
        };
        self.path = next;
        self.phase = TransitionPhase::Entering;
        true
    }

    /// Enter animation finished.
    pub fn enter_complete(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.phase != TransitionPhase::Entering {
            return false;
        }
        self.phase = TransitionPhase::Entered;
        true
    }

    /// Route loader timer elapsed.
    pub fn loader_elapsed(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.loader.route_visible {
            return false;
        }
        self.loader.route_visible = false;
        true
    }

    /// Startup overlay timer elapsed.
    pub fn dismiss_initial(&mut self) {
        self.loader.initial_visible = false;
    }
}

/// Run `f` after `ms` milliseconds in the browser. No-op during SSR, where
/// nothing is animated.
pub fn schedule(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(ms, f).forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = (ms, f);
}
