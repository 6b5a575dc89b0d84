use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menus_closed() {
    let state = UiState::default();
    assert!(!state.is_group_open(NavGroup::Videos));
    assert!(!state.is_group_open(NavGroup::Ads));
    assert!(!state.confirm_logout);
    assert_eq!(state.notice, None);
}

#[test]
fn toggle_group_is_independent() {
    let mut state = UiState::default();
    state.toggle_group(NavGroup::Videos);
    assert!(state.is_group_open(NavGroup::Videos));
    assert!(!state.is_group_open(NavGroup::Ads));
    state.toggle_group(NavGroup::Videos);
    assert!(!state.is_group_open(NavGroup::Videos));
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notice_is_taken_once() {
    let mut state = UiState::default();
    state.raise_notice("Logged out due to 5 minutes of inactivity.");
    assert_eq!(state.take_notice().as_deref(), Some("Logged out due to 5 minutes of inactivity."));
    assert_eq!(state.take_notice(), None);
}

#[test]
fn newer_notice_replaces_unread_one() {
    let mut state = UiState::default();
    state.raise_notice("first");
    state.raise_notice("second");
    assert_eq!(state.take_notice().as_deref(), Some("second"));
}
