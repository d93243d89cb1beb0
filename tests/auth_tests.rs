//! Authentication and session tests

use chrono::{Duration, Utc};
use user_api::auth::{
    hash_password, issue_token, verify_password, AuthService, Session, SessionStore,
};
use user_api::config::CompatConfig;
use user_api::error::Error;
use user_api::users::{NewUser, UserService, UserStore};

async fn setup(compat: CompatConfig) -> AuthService {
    let users = UserStore::new();
    UserService::new(users.clone(), compat.clone())
        .register(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .expect("Failed to register user");
    AuthService::new(users, SessionStore::new(), &compat)
}

#[test]
fn test_hash_same_input_same_digest() {
    assert_eq!(hash_password("abc"), hash_password("abc"));
    assert_eq!(hash_password("abc").len(), 64);
}

#[test]
fn test_verify_password() {
    let hashed = hash_password("abc");
    assert!(verify_password("abc", &hashed));
    assert!(!verify_password("abd", &hashed));
}

#[test]
fn test_multiple_token_generation() {
    let tokens: std::collections::HashSet<String> = (0..100).map(|_| issue_token()).collect();
    assert_eq!(tokens.len(), 100);
}

#[tokio::test]
async fn test_login_success() {
    let auth = setup(CompatConfig::default()).await;
    let response = auth
        .login("alice", "correct horse")
        .await
        .expect("Failed to log in");

    assert!(!response.token.is_empty());
    assert!(response.expires_at > Utc::now());
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let auth = setup(CompatConfig::default()).await;

    let wrong_password = auth.login("alice", "battery staple").await.unwrap_err();
    let unknown_user = auth.login("mallory", "correct horse").await.unwrap_err();

    assert!(matches!(wrong_password, Error::InvalidCredentials));
    assert!(matches!(unknown_user, Error::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert_eq!(auth.sessions().session_count().await, 0);
}

#[tokio::test]
async fn test_legacy_session_lasts_thirty_hours() {
    let auth = setup(CompatConfig::default()).await;
    let now = Utc::now();
    let response = auth.login_at("alice", "correct horse", now).await.unwrap();

    assert_eq!(response.expires_at, now + Duration::hours(30));
}

#[tokio::test]
async fn test_fixed_session_lasts_thirty_minutes() {
    let auth = setup(CompatConfig::fixed()).await;
    let now = Utc::now();
    let response = auth.login_at("alice", "correct horse", now).await.unwrap();

    assert_eq!(response.expires_at, now + Duration::minutes(30));
}

#[tokio::test]
async fn test_current_user_after_expiry() {
    for compat in [CompatConfig::default(), CompatConfig::fixed()] {
        let auth = setup(compat).await;
        let now = Utc::now();
        let response = auth.login_at("alice", "correct horse", now).await.unwrap();

        let live = auth
            .current_user_at(&response.token, now + Duration::minutes(29))
            .await;
        assert_eq!(live.map(|u| u.username), Some("alice".to_string()));

        let expired = auth
            .current_user_at(&response.token, response.expires_at)
            .await;
        assert!(expired.is_none());
    }
}

#[tokio::test]
async fn test_expired_session_is_kept_in_store() {
    let auth = setup(CompatConfig::default()).await;
    let past = Utc::now() - Duration::hours(31);
    let response = auth.login_at("alice", "correct horse", past).await.unwrap();

    assert!(auth.current_user(&response.token).await.is_none());
    assert!(auth.sessions().get(&response.token).await.is_some());
    assert_eq!(auth.sessions().count_active(Utc::now()).await, 0);
}

#[tokio::test]
async fn test_session_for_missing_user_resolves_to_none() {
    let auth = setup(CompatConfig::default()).await;
    auth.sessions()
        .insert(Session::new(
            "orphan".to_string(),
            99,
            Utc::now(),
            Duration::hours(1),
        ))
        .await;

    assert!(auth.current_user("orphan").await.is_none());
}

#[tokio::test]
async fn test_each_login_opens_new_session() {
    let auth = setup(CompatConfig::default()).await;
    let first = auth.login("alice", "correct horse").await.unwrap();
    let second = auth.login("alice", "correct horse").await.unwrap();

    assert_ne!(first.token, second.token);
    assert_eq!(auth.sessions().session_count().await, 2);
}
