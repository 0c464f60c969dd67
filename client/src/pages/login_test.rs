use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  ops@connectingfood.test ", " secret "),
        Ok(("ops@connectingfood.test".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("ops@connectingfood.test", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_credentials_rejects_email_without_at() {
    assert_eq!(validate_credentials("ops", "secret"), Err(INVALID_EMAIL));
}

// =============================================================
// access_notice
// =============================================================

fn session() -> gate::Session {
    gate::Session {
        access_token: "at".into(),
        refresh_token: None,
        expires_at: None,
        user: gate::User {
            id: "u-1".into(),
            email: Some("ops@connectingfood.test".into()),
            metadata: serde_json::Map::new(),
        },
    }
}

#[test]
fn access_notice_for_refused_signed_in_user() {
    assert_eq!(access_notice(&AuthState::resolved(session(), false)), Some(ACCESS_DENIED));
}

#[test]
fn no_access_notice_when_signed_out_granted_or_pending() {
    assert_eq!(access_notice(&AuthState::signed_out()), None);
    assert_eq!(access_notice(&AuthState::resolved(session(), true)), None);
    assert_eq!(access_notice(&AuthState::checking(session())), None);
    assert_eq!(access_notice(&AuthState::default()), None);
}
