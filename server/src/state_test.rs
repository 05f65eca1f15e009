use super::*;

#[test]
fn from_config_without_key_has_no_mailer() {
    let contact = ContactConfig { resend_api_key: None, to: Some("owner@example.com".into()), from: "x@example.com".into() };
    let state = AppState::from_config(contact);
    assert!(state.mailer.is_none());
    assert_eq!(state.contact.to.as_deref(), Some("owner@example.com"));
}

#[test]
fn from_config_with_key_builds_mailer() {
    let state = AppState::from_config(test_helpers::test_contact_config());
    assert!(state.mailer.is_some());
}

#[test]
fn clones_share_contact_config() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    assert!(Arc::ptr_eq(&state.contact, &other.contact));
}

#[tokio::test]
async fn mock_mailer_records_and_fails_on_request() {
    use crate::services::mailer::OutgoingEmail;

    let email = OutgoingEmail {
        from: "a@example.com".into(),
        to: "b@example.com".into(),
        reply_to: "c@example.com".into(),
        subject: "s".into(),
        html: "<p>h</p>".into(),
    };

    let ok = test_helpers::MockMailer::ok();
    assert!(ok.send(email.clone()).await.is_ok());
    assert_eq!(ok.sent(), vec![email.clone()]);

    let failing = test_helpers::MockMailer::failing("nope");
    assert_eq!(failing.send(email).await, Err("nope".to_owned()));
    assert_eq!(failing.sent().len(), 1);
}

#[test]
fn test_rate_limiter_uses_default_limits() {
    let limiter = test_helpers::test_rate_limiter();
    for _ in 0..3 {
        limiter.check_and_record("jane@example.com").unwrap();
    }
    assert!(limiter.check_and_record("jane@example.com").is_err());
}
