use super::*;
use gate::{Session, User};
use serde_json::Map;

fn session() -> Session {
    Session {
        access_token: "at".into(),
        refresh_token: None,
        expires_at: None,
        user: User { id: "u-1".into(), email: Some("ops@connectingfood.test".into()), metadata: Map::new() },
    }
}

// =============================================================
// should_redirect_to_login
// =============================================================

#[test]
fn no_redirect_while_loading() {
    assert!(!should_redirect_to_login(&AuthState::default()));
}

#[test]
fn no_redirect_while_check_in_flight() {
    assert!(!should_redirect_to_login(&AuthState::checking(session())));
}

#[test]
fn redirect_when_signed_out() {
    assert!(should_redirect_to_login(&AuthState::signed_out()));
}

#[test]
fn redirect_when_unauthorized() {
    assert!(should_redirect_to_login(&AuthState::resolved(session(), false)));
}

#[test]
fn no_redirect_when_authorized() {
    assert!(!should_redirect_to_login(&AuthState::resolved(session(), true)));
}

// =============================================================
// should_leave_login
// =============================================================

#[test]
fn leave_login_only_when_granted() {
    assert!(should_leave_login(&AuthState::resolved(session(), true)));
    assert!(!should_leave_login(&AuthState::default()));
    assert!(!should_leave_login(&AuthState::signed_out()));
    assert!(!should_leave_login(&AuthState::checking(session())));
}

#[test]
fn replace_options_replace_history_entry() {
    assert!(replace().replace);
}
