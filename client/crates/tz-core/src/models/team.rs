//! Team entity - membership container for tasks and invitations.

use crate::{TeamRole, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub uuid: String,
    pub name: String,
    pub lead_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present on detail responses; list responses carry counts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<TeamMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_tasks_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress_tasks_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_tasks_count: Option<u64>,
}

impl Team {
    /// Check whether the given user leads this team.
    pub fn is_lead(&self, user_id: &str) -> bool {
        self.lead_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTeam {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTeam {
    pub name: String,
}
