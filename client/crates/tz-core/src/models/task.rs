//! Task entity plus the request payloads the task endpoints accept.

use crate::{TaskPriority, TaskStatus, Team, User};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub uuid: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub team_id: String,
    /// Embedded on detail and team-list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(default)]
    pub assignees: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Check whether the given user is among the assignees.
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignees.iter().any(|u| u.id == user_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskStatus {
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignTask {
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveAssignees {
    pub user_ids: Vec<String>,
}

/// List filters; serialized straight into the query string, `None` skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_to: Option<NaiveDate>,
}

impl TaskFilters {
    pub fn is_empty(&self) -> bool {
        *self == TaskFilters::default()
    }
}

/// Per-team task counts; computed server-side, overdue included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub overdue: u64,
}
