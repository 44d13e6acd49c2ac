use super::*;

#[test]
fn push_toast_appends_in_order() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "Booking requested");
    state.push_toast(ToastKind::Error, "Could not save");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Booking requested");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Info, "one");
    let _second = state.push_toast(ToastKind::Info, "two");
    state.dismiss_toast(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Info, "one");
    state.dismiss_toast(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn toast_ids_are_unique() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "a");
    let b = state.push_toast(ToastKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn kind_class_suffixes() {
    assert_eq!(ToastKind::Info.class_suffix(), "info");
    assert_eq!(ToastKind::Success.class_suffix(), "success");
    assert_eq!(ToastKind::Error.class_suffix(), "error");
}
