use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Sent", "ok");
    let b = state.push(ToastKind::Error, "Failed", "nope");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a", "");
    let b = state.push(ToastKind::Info, "b", "");
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn push_drops_oldest_beyond_visible_limit() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(ToastKind::Info, format!("t{i}"), "");
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.toasts[0].title, "t2");
    assert_eq!(state.toasts[2].title, "t4");
}

#[test]
fn kind_class_names_modifier() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
    assert_eq!(ToastKind::default(), ToastKind::Info);
}
