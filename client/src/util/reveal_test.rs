use super::*;

#[test]
fn starts_hidden() {
    assert!(!RevealState::default().revealed());
}

#[test]
fn non_intersecting_observations_do_not_reveal() {
    let mut state = RevealState::default();
    assert!(!state.observe(false));
    assert!(!state.revealed());
}

#[test]
fn first_intersection_reveals_exactly_once() {
    let mut state = RevealState::default();
    assert!(state.observe(true));
    assert!(state.revealed());

    // Scrolling out and back in again never replays.
    assert!(!state.observe(false));
    assert!(!state.observe(true));
    assert!(state.revealed());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn non_browser_builds_start_revealed() {
    assert!(starts_revealed());
}
