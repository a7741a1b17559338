use crate::error::AppError;

use std::sync::Arc;

use tz_api::{ApiClient, Notifier};
use tz_config::Config;
use tz_query::{Invites, QueryCache, Tasks, Teams};
use tz_session::{Navigator, SessionState, SessionStore, Storage};

/// Toasts for a terminal: successes and failures go to stderr so stdout
/// stays parseable JSON.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

/// The CLI cannot redirect; it tells the user where to go instead.
struct TermNavigator;

impl Navigator for TermNavigator {
    fn redirect_to_login(&self) {
        eprintln!("Run `tz auth login` to start a new session.");
    }
}

/// Everything the commands need, constructed once at startup: storage ->
/// session state -> pipeline -> session store and resource handles. The
/// pipeline reads its token from the session state and routes 401s back
/// into it.
pub(crate) struct AppContext {
    pub(crate) session: SessionStore,
    pub(crate) teams: Teams,
    pub(crate) tasks: Tasks,
    pub(crate) invites: Invites,
    pub(crate) cache: Arc<QueryCache>,
}

impl AppContext {
    pub(crate) fn build(config: &Config) -> Result<Self, AppError> {
        let storage = Storage::open(config.storage_dir()?)?;

        let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);
        let navigator: Arc<dyn Navigator> = Arc::new(TermNavigator);

        let state = Arc::new(SessionState::new(storage, navigator));
        let api = Arc::new(ApiClient::new(
            &config.api,
            state.clone(),
            state.clone(),
            notifier.clone(),
        ));
        let cache = Arc::new(QueryCache::new());

        let session = SessionStore::new(state, api.clone(), notifier.clone());
        let teams = Teams::new(api.clone(), cache.clone(), notifier.clone());
        let tasks = Tasks::new(api.clone(), cache.clone(), notifier.clone());
        let invites = Invites::new(api, cache.clone(), notifier);

        Ok(Self {
            session,
            teams,
            tasks,
            invites,
            cache,
        })
    }
}
