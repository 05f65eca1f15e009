use super::*;

#[test]
fn contact_request_serializes_exactly_three_fields() {
    let req = ContactRequest {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Jane Doe", "email": "jane@example.com", "message": "Hello" })
    );
}

#[test]
fn contact_response_parses_failure_with_error() {
    let resp: ContactResponse = serde_json::from_str(r#"{"success":false,"error":"Invalid email format"}"#).unwrap();
    assert_eq!(resp.into_result("fallback"), Err("Invalid email format".to_owned()));
}

#[test]
fn contact_response_failure_without_error_uses_fallback() {
    let resp: ContactResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert_eq!(resp.into_result("fallback"), Err("fallback".to_owned()));

    let blank = ContactResponse { success: false, error: Some("  ".to_owned()) };
    assert_eq!(blank.into_result("fallback"), Err("fallback".to_owned()));
}

#[test]
fn contact_response_success_ignores_extra_fields() {
    let resp: ContactResponse = serde_json::from_str(r#"{"success":true,"data":{"id":"abc"}}"#).unwrap();
    assert_eq!(resp.into_result("fallback"), Ok(()));
}
