//! The live session and its lifecycle.
//!
//! `SessionState` is the shared core: the pipeline reads the token from it
//! and routes 401s into it, the store mutates it. `SessionStore` orchestrates
//! the remote flows (hydrate, login, register, logout).

use crate::storage::{AUTH_SESSION_KEY, AUTH_TOKEN_KEY, AUTH_USER_KEY, Storage};
use crate::{Navigator, SessionResult};

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tz_api::{ApiClient, Notifier, SessionExpiry, TokenProvider};
use tz_core::{LoginCredentials, RegisterData, User};

/// The live session.
///
/// Invariant: `is_authenticated` holds exactly when both `user` and `token`
/// are present. `is_initialized` flips to true once, after the first
/// hydration attempt, and never reverts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub is_initialized: bool,
}

/// Durable projection of [`Session`], written on every session mutation and
/// read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedAuthRecord {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Shared session core.
///
/// Implements the pipeline's two seams: [`TokenProvider`] (the outgoing
/// stage reads the token at send time) and [`SessionExpiry`] (the incoming
/// stage forces Authenticated -> Anonymous on 401).
pub struct SessionState {
    session: RwLock<Session>,
    storage: Storage,
    navigator: Arc<dyn Navigator>,
}

impl SessionState {
    pub fn new(storage: Storage, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session: RwLock::new(Session::default()),
            storage,
            navigator,
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .expect("session lock poisoned")
            .is_authenticated
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.session
            .write()
            .expect("session lock poisoned")
            .is_loading = loading;
    }

    /// Hydrate the live session from the persisted record. Runs once; later
    /// calls are no-ops. `is_initialized` is set unconditionally as the last
    /// step, whether or not a session was found.
    pub fn hydrate(&self) {
        {
            let session = self.session.read().expect("session lock poisoned");
            if session.is_initialized {
                return;
            }
        }

        let record: Option<PersistedAuthRecord> = self.storage.get(AUTH_SESSION_KEY);
        let (user, token) = match record {
            Some(record) => (record.user, record.token),
            // Older records predate the snapshot key; fall back to the pair.
            None => (
                self.storage.get(AUTH_USER_KEY),
                self.storage.get(AUTH_TOKEN_KEY),
            ),
        };

        let mut session = self.session.write().expect("session lock poisoned");
        if let (Some(user), Some(token)) = (user, token) {
            session.user = Some(user);
            session.token = Some(token);
            session.is_authenticated = true;
        }
        session.is_initialized = true;
    }

    /// Persist and enter the Authenticated state.
    pub(crate) fn set_authenticated(&self, user: User, token: String) -> SessionResult<()> {
        self.storage.set(AUTH_TOKEN_KEY, &token)?;
        self.storage.set(AUTH_USER_KEY, &user)?;
        self.storage.set(
            AUTH_SESSION_KEY,
            &PersistedAuthRecord {
                user: Some(user.clone()),
                token: Some(token.clone()),
                is_authenticated: true,
            },
        )?;

        let mut session = self.session.write().expect("session lock poisoned");
        session.user = Some(user);
        session.token = Some(token);
        session.is_authenticated = true;
        Ok(())
    }

    /// Replace the user record (profile refresh), keeping the invariant.
    pub(crate) fn set_user(&self, user: Option<User>) {
        if let Some(ref user) = user
            && let Err(e) = self.storage.set(AUTH_USER_KEY, user)
        {
            log::warn!("Failed to persist refreshed user: {e}");
        }

        let mut session = self.session.write().expect("session lock poisoned");
        session.user = user;
        session.is_authenticated = session.user.is_some() && session.token.is_some();

        let record = PersistedAuthRecord {
            user: session.user.clone(),
            token: session.token.clone(),
            is_authenticated: session.is_authenticated,
        };
        drop(session);

        if let Err(e) = self.storage.set(AUTH_SESSION_KEY, &record) {
            log::warn!("Failed to persist session snapshot: {e}");
        }
    }

    /// Drop to Anonymous and remove every persisted key.
    pub(crate) fn clear(&self) {
        let mut session = self.session.write().expect("session lock poisoned");
        session.user = None;
        session.token = None;
        session.is_authenticated = false;
        drop(session);

        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(AUTH_USER_KEY);
        self.storage.remove(AUTH_SESSION_KEY);
    }
}

impl TokenProvider for SessionState {
    fn token(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .token
            .clone()
    }
}

impl SessionExpiry for SessionState {
    /// Forced Authenticated -> Anonymous transition.
    ///
    /// Idempotent under concurrent 401s: the first caller performs the clear
    /// and the single redirect; every later caller observes Anonymous and
    /// returns.
    fn session_expired(&self) {
        {
            let mut session = self.session.write().expect("session lock poisoned");
            if !session.is_authenticated {
                return;
            }
            session.user = None;
            session.token = None;
            session.is_authenticated = false;
        }

        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(AUTH_USER_KEY);
        self.storage.remove(AUTH_SESSION_KEY);

        self.navigator.redirect_to_login();
    }
}

/// Orchestrates the session flows against the auth endpoints.
pub struct SessionStore {
    state: Arc<SessionState>,
    api: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
}

impl SessionStore {
    pub fn new(state: Arc<SessionState>, api: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state,
            api,
            notifier,
        }
    }

    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    pub fn session(&self) -> Session {
        self.state.snapshot()
    }

    /// Hydrate from persisted storage. Must run before any protected view
    /// consults the route guard.
    pub fn hydrate(&self) {
        self.state.hydrate();
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the normalized error is re-raised for the form to render
    /// field messages; no extra toast is emitted here (the pipeline already
    /// toasted everything except validation).
    pub async fn login(&self, credentials: &LoginCredentials) -> SessionResult<()> {
        self.state.set_loading(true);

        match self.api.login(credentials).await {
            Ok(auth) => {
                let persisted = self.state.set_authenticated(auth.user, auth.token);
                self.state.set_loading(false);
                persisted?;
                self.notifier.success("Welcome back!");
                Ok(())
            }
            Err(e) => {
                self.state.set_loading(false);
                Err(e.into())
            }
        }
    }

    /// Create an account. Deliberately does not authenticate: the flow
    /// requires a manual login afterwards.
    pub async fn register(&self, data: &RegisterData) -> SessionResult<()> {
        self.state.set_loading(true);
        let result = self.api.register(data).await;
        self.state.set_loading(false);

        result?;
        Ok(())
    }

    /// End the session. The remote notify is best-effort - a dead server
    /// must never trap the user in a logged-in client.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::warn!("Logout request failed: {e}");
        }

        self.state.clear();
        self.notifier.success("Logged out successfully");
    }

    /// Re-fetch the account record and update the session copy.
    pub async fn refresh_profile(&self) -> SessionResult<User> {
        let user = self.api.profile().await?;
        self.state.set_user(Some(user.clone()));
        Ok(user)
    }

    pub fn set_user(&self, user: Option<User>) {
        self.state.set_user(user);
    }
}
