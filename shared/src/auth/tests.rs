use super::*;
use crate::request::MockHttpClient;
use serde_json::json;
use std::rc::Rc;

const BASE: &str = "https://db.example.com";
const TOKEN_URL: &str = "https://db.example.com/auth/v1/token?grant_type=password";
const REFRESH_URL: &str = "https://db.example.com/auth/v1/token?grant_type=refresh_token";

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn session(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "access-1".to_string(),
        token_type: "bearer".to_string(),
        expires_in: 3600,
        expires_at,
        refresh_token: "refresh-1".to_string(),
        user: User {
            id: "user-1".to_string(),
            email: Some("dev@fastcode.io".to_string()),
        },
    }
}

fn session_json(access: &str) -> serde_json::Value {
    json!({
        "access_token": access,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-2",
        "user": { "id": "user-1", "email": "dev@fastcode.io" }
    })
}

fn setup() -> (Rc<MockHttpClient>, SupabaseClient<Rc<MockHttpClient>>) {
    let http = Rc::new(MockHttpClient::new());
    let client = SupabaseClient::new(http.clone(), BASE, "anon-key");
    (http, client)
}

// =========================================================
// 会话数据
// =========================================================

#[test]
fn test_stamped_fills_missing_expiry() {
    let stamped = session(None).stamped(at(1_000));
    assert_eq!(stamped.expires_at, Some(4_600));

    let kept = session(Some(99)).stamped(at(1_000));
    assert_eq!(kept.expires_at, Some(99));
}

#[test]
fn test_is_expired_with_margin() {
    let s = session(Some(1_000));
    assert!(!s.is_expired(at(900)));
    assert!(s.is_expired(at(995)));
    assert!(s.is_expired(at(1_000)));
    assert!(session(None).is_expired(at(0)));
}

#[test]
fn test_session_defaults_token_type() {
    let s: Session = serde_json::from_value(json!({
        "access_token": "a",
        "expires_in": 60,
        "refresh_token": "r",
        "user": { "id": "u" }
    }))
    .unwrap();
    assert_eq!(s.token_type, "bearer");
    assert_eq!(s.expires_at, None);
    assert_eq!(s.user.email, None);
}

// =========================================================
// 状态机
// =========================================================

#[test]
fn test_initial_state_is_loading() {
    let state = SessionState::default();
    assert_eq!(state.phase(), AuthPhase::Loading);
    assert!(state.is_loading());
    assert!(!state.is_signed_in());
    assert_eq!(state.dashboard_gate(), DashboardGate::Wait);
    assert_eq!(state.dashboard_gate().resolve(Page::Dashboard), Page::Dashboard);
}

#[test]
fn test_restored_without_session_redirects_dashboard() {
    let mut state = SessionState::restoring();
    state.restored(None);
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert!(state.user().is_none());

    let gate = state.dashboard_gate();
    assert_eq!(gate, DashboardGate::RedirectToLogin);
    assert_eq!(gate.resolve(Page::Dashboard), Page::Login);
    assert_eq!(gate.resolve(Page::Projects), Page::Projects);
}

#[test]
fn test_restored_with_session_renders_dashboard() {
    let mut state = SessionState::restoring();
    state.restored(Some(session(Some(1_000))));
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
    assert_eq!(state.dashboard_gate(), DashboardGate::Render);
}

#[test]
fn test_apply_sign_in_success() {
    let mut state = SessionState::restoring();
    state.restored(None);

    let next = state.apply_sign_in(Ok(session(Some(1_000))));
    assert_eq!(next, Ok(Page::Dashboard));
    assert!(state.is_signed_in());
    assert_eq!(state.session().map(|s| s.access_token.as_str()), Some("access-1"));
}

#[test]
fn test_apply_sign_in_failure_keeps_state() {
    let mut state = SessionState::restoring();
    state.restored(None);
    let before = state.clone();

    let next = state.apply_sign_in(Err("Invalid login credentials".to_string()));
    assert_eq!(next, Err("Invalid login credentials".to_string()));
    assert_eq!(state, before);
}

#[test]
fn test_sign_out_is_idempotent() {
    let mut state = SessionState::restoring();
    state.restored(Some(session(Some(1_000))));

    assert!(state.sign_out().is_some());
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert!(state.sign_out().is_none());
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert_eq!(state.dashboard_gate(), DashboardGate::RedirectToLogin);
}

// =========================================================
// 流程
// =========================================================

#[tokio::test]
async fn test_sign_in_rejects_blank_input() {
    let (http, client) = setup();

    let err = sign_in(&client, "   ", "secret", at(0)).await.unwrap_err();
    assert_eq!(err, "Please enter your email and password");
    let err = sign_in(&client, "dev@fastcode.io", "", at(0)).await.unwrap_err();
    assert_eq!(err, "Please enter your email and password");
    assert!(http.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_sign_in_stamps_session() {
    let (http, client) = setup();
    http.mock_response(TOKEN_URL, 200, session_json("access-9"));

    let s = sign_in(&client, " dev@fastcode.io ", "secret", at(1_000))
        .await
        .unwrap();
    assert_eq!(s.access_token, "access-9");
    assert_eq!(s.expires_at, Some(4_600));

    let requests = http.requests.borrow();
    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email"], "dev@fastcode.io");
}

#[tokio::test]
async fn test_sign_in_failure_message() {
    let (http, client) = setup();
    http.mock_response(
        TOKEN_URL,
        400,
        json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" }),
    );

    let err = sign_in(&client, "dev@fastcode.io", "wrong", at(0))
        .await
        .unwrap_err();
    assert_eq!(err, "Invalid login credentials");
}

#[tokio::test]
async fn test_restore_without_stored_session() {
    let (http, client) = setup();
    assert_eq!(restore_session(&client, None, at(0)).await, None);
    assert!(http.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_restore_reuses_unexpired_session() {
    let (http, client) = setup();
    let stored = session(Some(5_000));

    let restored = restore_session(&client, Some(stored.clone()), at(1_000)).await;
    assert_eq!(restored, Some(stored));
    assert!(http.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_restore_refreshes_expired_session() {
    let (http, client) = setup();
    http.mock_response(REFRESH_URL, 200, session_json("access-2"));

    let restored = restore_session(&client, Some(session(Some(500))), at(1_000))
        .await
        .unwrap();
    assert_eq!(restored.access_token, "access-2");
    assert_eq!(restored.refresh_token, "refresh-2");
    assert_eq!(restored.expires_at, Some(4_600));
    assert_eq!(http.request_urls(), vec![REFRESH_URL.to_string()]);
}

#[tokio::test]
async fn test_restore_failed_refresh_signs_out() {
    let (http, client) = setup();
    http.mock_response(
        REFRESH_URL,
        400,
        json!({ "error_description": "Invalid Refresh Token" }),
    );

    let restored = restore_session(&client, Some(session(Some(500))), at(1_000)).await;
    assert_eq!(restored, None);
    assert_eq!(http.requests.borrow().len(), 1);
}
