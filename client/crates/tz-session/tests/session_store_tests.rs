//! Integration tests for the session lifecycle against a wiremock server:
//! login persists, failures leave no trace, logout never blocks, and a 401
//! anywhere in the pipeline clears the session exactly once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;
use tempfile::TempDir;
use tz_api::{ApiClient, ApiError, Notifier};
use tz_config::ApiConfig;
use tz_session::{
    AUTH_SESSION_KEY, AUTH_TOKEN_KEY, AUTH_USER_KEY, Navigator, PersistedAuthRecord, SessionState,
    SessionStore, Storage,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    fn count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

struct Harness {
    _temp: TempDir,
    store: SessionStore,
    state: Arc<SessionState>,
    api: Arc<ApiClient>,
    navigator: Arc<RecordingNavigator>,
    notifier: Arc<RecordingNotifier>,
}

/// Wire the real production graph: the pipeline reads tokens from the
/// session state and routes 401s back into it.
fn harness(base_url: &str) -> Harness {
    let temp = TempDir::new().unwrap();
    let storage = Storage::open(temp.path().join("storage")).unwrap();
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(SessionState::new(storage, navigator.clone()));

    let api = Arc::new(ApiClient::new(
        &ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        },
        state.clone(),
        state.clone(),
        notifier.clone(),
    ));

    let store = SessionStore::new(state.clone(), api.clone(), notifier.clone());

    Harness {
        _temp: temp,
        store,
        state,
        api,
        navigator,
        notifier,
    }
}

fn storage_of(h: &Harness) -> Storage {
    Storage::open(h._temp.path().join("storage")).unwrap()
}

fn user_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "created_at": "2024-01-15T10:30:00.000000Z",
        "updated_at": "2024-01-15T10:30:00.000000Z"
    })
}

async fn mount_login(mock_server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": token, "user": user_json("1", "A") }
        })))
        .mount(mock_server)
        .await;
}

fn credentials() -> tz_core::LoginCredentials {
    tz_core::LoginCredentials {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        remember: None,
    }
}

#[tokio::test]
async fn test_login_persists_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    let session = h.store.session();
    assert!(session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.user.as_ref().unwrap().id, "1");

    // Durable record matches the live session.
    let storage = storage_of(&h);
    let token: Option<String> = storage.get(AUTH_TOKEN_KEY);
    assert_eq!(token.as_deref(), Some("t1"));
    let record: PersistedAuthRecord = storage.get(AUTH_SESSION_KEY).unwrap();
    assert!(record.is_authenticated);
    assert_eq!(record.token.as_deref(), Some("t1"));
    assert_eq!(record.user.unwrap().id, "1");

    assert_eq!(h.notifier.successes(), vec!["Welcome back!"]);
}

#[tokio::test]
async fn test_login_token_used_by_next_request() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(header("Authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "data": [] } })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    h.api.list_teams().await.unwrap();
}

#[tokio::test]
async fn test_failed_login_leaves_no_trace() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": { "email": ["These credentials do not match our records."] }
        })))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    let err = h.store.login(&credentials()).await.unwrap_err();

    let api_error = err.as_api().unwrap();
    assert_eq!(api_error.status(), Some(422));
    assert_eq!(
        api_error.field_errors().unwrap()["email"],
        vec!["These credentials do not match our records."]
    );

    let session = h.store.session();
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);

    // Nothing was persisted, and the validation failure produced no toast.
    let storage = storage_of(&h);
    assert!(!storage.contains(AUTH_TOKEN_KEY));
    assert!(!storage.contains(AUTH_USER_KEY));
    assert!(!storage.contains(AUTH_SESSION_KEY));
    assert_eq!(h.notifier.error_count(), 0);
    assert!(h.notifier.successes().is_empty());
}

#[tokio::test]
async fn test_register_does_not_authenticate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_string_contains("password_confirmation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "token": "unused", "user": user_json("2", "Bob") }
        })))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store
        .register(&tz_core::RegisterData {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        })
        .await
        .unwrap();

    let session = h.store.session();
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);
    assert!(!storage_of(&h).contains(AUTH_TOKEN_KEY));
}

#[tokio::test]
async fn test_logout_clears_even_when_remote_fails() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    h.store.logout().await;

    let session = h.store.session();
    assert!(!session.is_authenticated);
    assert!(session.token.is_none());
    assert!(!storage_of(&h).contains(AUTH_SESSION_KEY));
    assert!(
        h.notifier
            .successes()
            .contains(&"Logged out successfully".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_401s_clear_once_and_redirect_once() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    let filters = tz_core::TaskFilters::default();
    let (a, b, c) = tokio::join!(
        h.api.list_teams(),
        h.api.my_pending_invitations(),
        h.api.my_tasks(&filters),
    );
    assert_eq!(a.unwrap_err(), ApiError::Unauthorized);
    assert_eq!(b.unwrap_err(), ApiError::Unauthorized);
    assert_eq!(c.unwrap_err(), ApiError::Unauthorized);

    assert_eq!(h.navigator.count(), 1);
    assert!(!h.state.is_authenticated());
    let storage = storage_of(&h);
    assert!(!storage.contains(AUTH_TOKEN_KEY));
    assert!(!storage.contains(AUTH_USER_KEY));
    assert!(!storage.contains(AUTH_SESSION_KEY));
}

#[tokio::test]
async fn test_relogin_rearms_the_401_handler() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;
    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();

    h.store.login(&credentials()).await.unwrap();
    h.api.list_teams().await.unwrap_err();
    assert_eq!(h.navigator.count(), 1);

    h.store.login(&credentials()).await.unwrap();
    h.api.list_teams().await.unwrap_err();
    assert_eq!(h.navigator.count(), 2);
}

#[tokio::test]
async fn test_hydrated_store_restores_previous_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;

    // First process: login.
    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    // Second process over the same storage dir: hydration alone restores.
    let storage = storage_of(&h);
    let navigator = Arc::new(RecordingNavigator::default());
    let state = Arc::new(SessionState::new(storage, navigator));
    state.hydrate();

    let session = state.snapshot();
    assert!(session.is_initialized);
    assert!(session.is_authenticated);
    assert_eq!(session.token.as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_refresh_profile_updates_session_user() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "t1").await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": user_json("1", "Alicia")
        })))
        .mount(&mock_server)
        .await;

    let h = harness(&mock_server.uri());
    h.store.hydrate();
    h.store.login(&credentials()).await.unwrap();

    let user = h.store.refresh_profile().await.unwrap();
    assert_eq!(user.name, "Alicia");
    assert_eq!(h.store.session().user.unwrap().name, "Alicia");
    assert!(h.store.session().is_authenticated);
}
