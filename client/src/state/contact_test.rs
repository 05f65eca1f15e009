use std::cell::RefCell;

use super::*;

struct StubChannel {
    calls: RefCell<Vec<ContactRequest>>,
    result: Result<(), String>,
}

impl StubChannel {
    fn succeeding() -> Self {
        Self { calls: RefCell::new(Vec::new()), result: Ok(()) }
    }

    fn failing(message: &str) -> Self {
        Self { calls: RefCell::new(Vec::new()), result: Err(message.to_owned()) }
    }
}

impl ContactChannel for StubChannel {
    async fn send(&self, request: &ContactRequest) -> Result<(), String> {
        self.calls.borrow_mut().push(request.clone());
        self.result.clone()
    }
}

fn filled(name: &str, email: &str, message: &str) -> ContactState {
    ContactState {
        fields: ContactFields { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() },
        status: SubmitStatus::Idle,
    }
}

#[test]
fn email_shape_accepts_basic_addresses() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["abc", "", "@example.com", "jane@", "jane@example", "jane@.com", "jane@example.", "a@b@c.com", "ja ne@example.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn validate_reports_first_missing_field_in_order() {
    let fields = ContactFields { name: "  ".into(), email: String::new(), message: "hi".into() };
    assert_eq!(validate(&fields), Err(ContactValidationError::MissingField(ContactField::Name)));

    let fields = ContactFields { name: "Jane".into(), email: "jane@example.com".into(), message: "\n".into() };
    assert_eq!(validate(&fields), Err(ContactValidationError::MissingField(ContactField::Message)));
}

#[test]
fn validate_trims_values() {
    let fields = ContactFields { name: " Jane ".into(), email: " jane@example.com ".into(), message: " Hello\n".into() };
    let req = validate(&fields).unwrap();
    assert_eq!(req.name, "Jane");
    assert_eq!(req.email, "jane@example.com");
    assert_eq!(req.message, "Hello");
}

#[test]
fn validation_error_messages_name_the_field() {
    assert_eq!(ContactValidationError::MissingField(ContactField::Email).to_string(), "Email is required.");
    assert_eq!(ContactValidationError::InvalidEmail.to_string(), "Enter a valid email address.");
}

#[test]
fn empty_field_never_calls_channel() {
    let channel = StubChannel::succeeding();
    for state in [filled("", "jane@example.com", "Hello"), filled("Jane", "", "Hello"), filled("Jane", "jane@example.com", "")] {
        let mut state = state;
        let outcome = futures::executor::block_on(submit_with(&mut state, &channel));
        assert!(matches!(outcome, Err(SubmitBlocked::Invalid(ContactValidationError::MissingField(_)))));
        assert_eq!(state.status, SubmitStatus::Idle);
    }
    assert!(channel.calls.borrow().is_empty());
}

#[test]
fn invalid_email_never_calls_channel() {
    let channel = StubChannel::succeeding();
    let mut state = filled("Jane Doe", "abc", "Hello");
    let outcome = futures::executor::block_on(submit_with(&mut state, &channel));
    assert_eq!(outcome, Err(SubmitBlocked::Invalid(ContactValidationError::InvalidEmail)));
    assert!(channel.calls.borrow().is_empty());
    assert_eq!(state.fields.email, "abc");
}

#[test]
fn successful_submission_sends_once_and_confirms() {
    let channel = StubChannel::succeeding();
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");

    let notice = futures::executor::block_on(submit_with(&mut state, &channel)).unwrap();

    let calls = channel.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ContactRequest { name: "Jane Doe".into(), email: "jane@example.com".into(), message: "Hello".into() }
    );
    assert!(state.is_submitted());
    assert!(!state.is_submitting());
    assert!(state.can_submit());
    assert_eq!(state.fields, ContactFields::default());
    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(notice.title, SUCCESS_TITLE);
}

#[test]
fn failed_submission_keeps_fields_and_reenables() {
    let channel = StubChannel::failing("Invalid email format");
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    let before = state.fields.clone();

    let notice = futures::executor::block_on(submit_with(&mut state, &channel)).unwrap();

    assert_eq!(channel.calls.borrow().len(), 1);
    assert_eq!(state.fields, before);
    assert_eq!(state.status, SubmitStatus::Failed("Invalid email format".into()));
    assert!(state.can_submit());
    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.description, "Invalid email format");
}

#[test]
fn begin_submit_blocks_while_in_flight() {
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    assert!(state.begin_submit().is_ok());
    assert!(state.is_submitting());
    assert!(!state.can_submit());
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
}

#[test]
fn resubmit_after_failure_is_allowed() {
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    state.begin_submit().unwrap();
    state.finish(Err("boom".into()));
    assert!(state.begin_submit().is_ok());
}

#[test]
fn complete_after_begin_submit_confirms_and_clears() {
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    state.begin_submit().unwrap();

    let notice = complete(&mut state, Ok(()));

    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(notice.title, SUCCESS_TITLE);
    assert!(state.is_submitted());
    assert_eq!(state.fields, ContactFields::default());
}

#[test]
fn complete_with_error_keeps_fields_and_shows_message() {
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    state.begin_submit().unwrap();

    let notice = complete(&mut state, Err("Something went wrong. Please try again.".into()));

    assert_eq!(notice.kind, ToastKind::Error);
    assert_eq!(notice.title, FAILURE_TITLE);
    assert_eq!(notice.description, "Something went wrong. Please try again.");
    assert_eq!(state.status, SubmitStatus::Failed("Something went wrong. Please try again.".into()));
    assert_eq!(state.fields.name, "Jane Doe");
    assert!(state.can_submit());
}

#[test]
fn reset_returns_to_empty_idle_form() {
    let mut state = filled("Jane Doe", "jane@example.com", "Hello");
    state.begin_submit().unwrap();
    state.finish(Ok(()));
    state.reset();
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.fields, ContactFields::default());
}

#[test]
fn set_and_get_address_each_field() {
    let mut fields = ContactFields::default();
    fields.set(ContactField::Email, "x@y.z".into());
    assert_eq!(fields.get(ContactField::Email), "x@y.z");
    assert_eq!(fields.get(ContactField::Name), "");
}
