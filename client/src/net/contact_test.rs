#![cfg(not(feature = "hydrate"))]

use super::*;

fn sample() -> ContactRequest {
    ContactRequest {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Hello".to_owned(),
    }
}

#[test]
fn envelope_error_is_shown_verbatim() {
    let body = ContactResponse { success: false, error: Some("Invalid email address".to_owned()) };
    assert_eq!(settle_response(false, Some(body)), Err("Invalid email address".to_owned()));
}

#[test]
fn envelope_without_error_text_uses_generic_failure() {
    let body = ContactResponse { success: false, error: None };
    assert_eq!(settle_response(false, Some(body)), Err(GENERIC_FAILURE.to_owned()));
}

#[test]
fn non_envelope_failure_uses_generic_failure() {
    assert_eq!(settle_response(false, None), Err(GENERIC_FAILURE.to_owned()));
}

#[test]
fn non_envelope_success_is_accepted() {
    assert_eq!(settle_response(true, None), Ok(()));
}

#[test]
fn successful_envelope_is_accepted() {
    assert_eq!(settle_response(true, Some(ContactResponse { success: true, error: None })), Ok(()));
}

#[test]
fn endpoint_matches_server_route() {
    assert_eq!(CONTACT_ENDPOINT, "/api/send-contact-email");
}

#[test]
fn http_channel_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(HttpChannel.send(&sample()));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[test]
fn simulated_channel_always_succeeds() {
    let channel = SimulatedChannel::default();
    assert_eq!(channel.delay_ms, SIMULATED_DELAY_MS);
    assert_eq!(futures::executor::block_on(channel.send(&sample())), Ok(()));
}

#[test]
fn site_channel_defaults_to_http() {
    assert!(matches!(SiteChannel::from_name(None), SiteChannel::Http(_)));
    assert!(matches!(SiteChannel::from_name(Some("relay")), SiteChannel::Http(_)));
}

#[test]
fn site_channel_selects_simulated_by_name() {
    let channel = SiteChannel::from_name(Some(" simulated "));
    assert!(matches!(channel, SiteChannel::Simulated(_)));
    assert_eq!(futures::executor::block_on(channel.send(&sample())), Ok(()));
}
