use super::*;
use crate::state::test_helpers::{MockMailer, test_contact_config};

fn jane() -> ContactRequest {
    ContactRequest { name: "Jane Doe".into(), email: "jane@example.com".into(), message: "Hello".into() }
}

// =========================================================================
// validation
// =========================================================================

#[test]
fn is_valid_email_accepts_basic_shapes() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a.b+c@sub.example.co"));
}

#[test]
fn is_valid_email_rejects_malformed() {
    for bad in ["abc", "abc@", "@example.com", "jane@example", "jane@.com", "jane@example.", "ja ne@example.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn validate_request_trims_fields() {
    let req = ContactRequest { name: "  Jane Doe ".into(), email: " jane@example.com ".into(), message: "\nHello\n".into() };
    assert_eq!(validate_request(&req), Ok(jane()));
}

#[test]
fn validate_request_requires_every_field() {
    let mut req = jane();
    req.message = "   ".into();
    assert_eq!(validate_request(&req), Err(ContactError::MissingFields));

    let mut req = jane();
    req.name.clear();
    assert_eq!(validate_request(&req), Err(ContactError::MissingFields));
}

#[test]
fn validate_request_rejects_bad_email() {
    let mut req = jane();
    req.email = "abc".into();
    assert_eq!(validate_request(&req), Err(ContactError::InvalidEmail));
}

#[test]
fn missing_json_fields_deserialize_as_empty() {
    let req: ContactRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
    assert_eq!(req.email, "");
    assert_eq!(validate_request(&req), Err(ContactError::MissingFields));
}

// =========================================================================
// rendering
// =========================================================================

#[test]
fn subject_includes_sender_name() {
    assert_eq!(subject_for("Jane Doe"), "Portfolio Contact: Jane Doe");
}

#[test]
fn escape_html_escapes_markup() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn render_contact_email_fills_every_placeholder() {
    let html = render_contact_email(&jane());
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("jane@example.com"));
    assert!(html.contains("Hello"));
    assert!(!html.contains("{{"));
}

#[test]
fn render_contact_email_escapes_and_breaks_lines() {
    let req = ContactRequest {
        name: "<script>".into(),
        email: "jane@example.com".into(),
        message: "line one\r\nline <two>".into(),
    };
    let html = render_contact_email(&req);
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("line one<br>line &lt;two&gt;"));
}

#[test]
fn render_contact_email_does_not_expand_placeholders_in_values() {
    let req = ContactRequest {
        name: "{{EMAIL}} {{MESSAGE}}".into(),
        email: "jane@example.com".into(),
        message: "Hello".into(),
    };
    let html = render_contact_email(&req);
    assert!(html.contains("<strong>From:</strong> {{EMAIL}} {{MESSAGE}}</p>"));
    assert!(!html.contains("<strong>From:</strong> jane@example.com"));
}

#[test]
fn fill_template_scans_once_and_keeps_unknown_keys() {
    let out = fill_template("a {{X}} b {{Y}} c {{Z}} {{open", |key| match key {
        "X" => Some("{{Y}}"),
        "Y" => Some("y"),
        _ => None,
    });
    assert_eq!(out, "a {{Y}} b y c {{Z}} {{open");
}

// =========================================================================
// send_contact_email
// =========================================================================

#[tokio::test]
async fn send_addresses_owner_and_replies_to_sender() {
    let mailer = MockMailer::ok();
    let cfg = test_contact_config();

    send_contact_email(Some(&mailer), &cfg, &jane()).await.unwrap();

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(Some(sent[0].to.as_str()), cfg.to.as_deref());
    assert_eq!(sent[0].from, cfg.from);
    assert_eq!(sent[0].reply_to, "jane@example.com");
    assert_eq!(sent[0].subject, "Portfolio Contact: Jane Doe");
}

#[tokio::test]
async fn send_invalid_request_never_reaches_mailer() {
    let mailer = MockMailer::ok();
    let mut req = jane();
    req.email = "abc".into();

    let err = send_contact_email(Some(&mailer), &test_contact_config(), &req).await.unwrap_err();
    assert_eq!(err, ContactError::InvalidEmail);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn send_without_mailer_is_not_configured() {
    let err = send_contact_email(None, &test_contact_config(), &jane()).await.unwrap_err();
    assert_eq!(err, ContactError::NotConfigured);
}

#[tokio::test]
async fn send_without_recipient_is_not_configured() {
    let mailer = MockMailer::ok();
    let mut cfg = test_contact_config();
    cfg.to = None;

    let err = send_contact_email(Some(&mailer), &cfg, &jane()).await.unwrap_err();
    assert_eq!(err, ContactError::NotConfigured);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn send_surfaces_provider_error() {
    let mailer = MockMailer::failing("domain not verified");
    let err = send_contact_email(Some(&mailer), &test_contact_config(), &jane()).await.unwrap_err();
    assert_eq!(err, ContactError::Delivery("domain not verified".into()));
}
