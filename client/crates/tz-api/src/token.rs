/// Read side of the session: the pipeline asks for the current token at send
/// time, so a login that completes between two requests is picked up by the
/// second one.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Reaction to an authentication failure (401). Implementations must be
/// idempotent: any number of concurrent failed requests may call this at
/// once, and only one session clear and one redirect may result.
pub trait SessionExpiry: Send + Sync {
    fn session_expired(&self);
}

/// Token source for unauthenticated flows and tests.
#[derive(Debug, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Expiry sink that only logs; used when no session store is wired in.
#[derive(Debug, Default)]
pub struct IgnoreExpiry;

impl SessionExpiry for IgnoreExpiry {
    fn session_expired(&self) {
        log::warn!("Authentication failure with no session handler attached");
    }
}
