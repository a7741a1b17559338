use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account as returned by the API. Ids are passed through as the
/// server-issued strings; the client never generates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
