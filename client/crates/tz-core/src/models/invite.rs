//! Invitation entity plus the request payloads the invite endpoints accept.

use crate::{InviteStatus, Team, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invite {
    pub id: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    pub inviter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter: Option<User>,
    pub invitee_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitee: Option<User>,
    /// Free-form role string the invitee joins as (defaults to "member").
    pub role: String,
    pub status: InviteStatus,
    /// One-time token used to accept or decline.
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invite {
    pub fn is_pending(&self) -> bool {
        self.status == InviteStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendInvitations {
    pub team_id: String,
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcceptInvitation {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclineInvitation {
    pub token: String,
}
