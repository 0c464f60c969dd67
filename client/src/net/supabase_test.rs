use super::*;
use serde_json::json;

// =============================================================================
// Endpoints
// =============================================================================

#[test]
fn token_endpoint_carries_grant_type() {
    assert_eq!(
        token_endpoint("https://abc.supabase.co", "password"),
        "https://abc.supabase.co/auth/v1/token?grant_type=password"
    );
}

#[test]
fn logout_endpoint_carries_scope() {
    assert_eq!(
        logout_endpoint("https://abc.supabase.co", SignOutScope::Local),
        "https://abc.supabase.co/auth/v1/logout?scope=local"
    );
}

#[test]
fn user_and_rpc_endpoints() {
    assert_eq!(user_endpoint("https://abc.supabase.co"), "https://abc.supabase.co/auth/v1/user");
    assert_eq!(
        rpc_endpoint("https://abc.supabase.co", IS_CF_USER_RPC),
        "https://abc.supabase.co/rest/v1/rpc/is_cf_user"
    );
}

// =============================================================================
// error_from_body
// =============================================================================

#[test]
fn error_body_prefers_error_description() {
    let body = json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" }).to_string();
    assert_eq!(
        error_from_body(400, &body),
        ProviderError::Response { status: 400, message: "Invalid login credentials".into() }
    );
}

#[test]
fn error_body_reads_msg_and_message_fields() {
    let auth = json!({ "code": 422, "msg": "User already registered" }).to_string();
    assert_eq!(
        error_from_body(422, &auth),
        ProviderError::Response { status: 422, message: "User already registered".into() }
    );
    let rest = json!({ "code": "42501", "message": "permission denied for function is_cf_user" }).to_string();
    assert_eq!(
        error_from_body(403, &rest),
        ProviderError::Response { status: 403, message: "permission denied for function is_cf_user".into() }
    );
}

#[test]
fn error_body_skips_empty_fields() {
    let body = json!({ "error_description": "", "error": "server_error" }).to_string();
    assert_eq!(error_from_body(500, &body), ProviderError::Response { status: 500, message: "server_error".into() });
}

#[test]
fn non_json_error_body_is_used_verbatim() {
    assert_eq!(
        error_from_body(502, " Bad Gateway \n"),
        ProviderError::Response { status: 502, message: "Bad Gateway".into() }
    );
}

#[test]
fn decoded_errors_classify_for_display() {
    let body = json!({ "error_description": "Invalid login credentials" }).to_string();
    assert_eq!(error_from_body(400, &body).user_message(), "Invalid email or password.");
}

// =============================================================================
// Token responses
// =============================================================================

#[test]
fn token_body_derives_expiry_from_expires_in() {
    let body = json!({
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": { "id": "u-1", "email": "ops@connectingfood.test", "user_metadata": {} },
    })
    .to_string();
    let session = session_from_token_body(&body, 1_000).unwrap();
    assert_eq!(session.expires_at, Some(4_600));
    assert_eq!(session.refresh_token.as_deref(), Some("rt"));
    assert_eq!(session.user.email.as_deref(), Some("ops@connectingfood.test"));
}

#[test]
fn token_body_keeps_provider_expiry() {
    let body = json!({
        "access_token": "at",
        "expires_in": 3600,
        "expires_at": 42,
        "user": { "id": "u-1" },
    })
    .to_string();
    assert_eq!(session_from_token_body(&body, 1_000).unwrap().expires_at, Some(42));
}

#[test]
fn token_body_without_user_is_parse_error() {
    let body = json!({ "access_token": "at" }).to_string();
    assert!(matches!(session_from_token_body(&body, 0), Err(ProviderError::Parse(_))));
}

#[test]
fn refresh_is_due_inside_margin() {
    let session = session_from_token_body(
        &json!({ "access_token": "at", "expires_at": 1_000, "user": { "id": "u-1" } }).to_string(),
        0,
    )
    .unwrap();
    assert!(!needs_refresh(&session, 1_000 - REFRESH_MARGIN_SECS - 1));
    assert!(needs_refresh(&session, 1_000 - REFRESH_MARGIN_SECS));
}

// =============================================================================
// RPC result
// =============================================================================

#[test]
fn only_json_true_is_cf() {
    assert_eq!(is_cf_from_body("true"), Ok(true));
    assert_eq!(is_cf_from_body("false"), Ok(false));
    assert_eq!(is_cf_from_body("null"), Ok(false));
    assert_eq!(is_cf_from_body("\"true\""), Ok(false));
    assert_eq!(is_cf_from_body("[true]"), Ok(false));
}

#[test]
fn unparsable_rpc_body_is_error() {
    assert!(matches!(is_cf_from_body("<html>"), Err(ProviderError::Parse(_))));
}
