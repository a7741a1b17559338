
use crate::Navigator;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Navigator that counts redirects.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub(crate) fn count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn sample_user(id: &str, name: &str) -> tz_core::User {
    tz_core::User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        avatar_url: None,
        created_at: "2024-01-15T10:30:00Z".parse().unwrap(),
        updated_at: "2024-01-15T10:30:00Z".parse().unwrap(),
    }
}
