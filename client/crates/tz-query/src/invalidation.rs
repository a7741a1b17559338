//! The mutation -> query-key invalidation table.
//!
//! Every write the client can perform is one variant here, carrying the ids
//! it affects. `invalidates()` is the single place the dependency between
//! writes and cached reads is declared: a mutation invalidates exactly the
//! listed prefixes, so creating a task for one team never touches another
//! team's cached lists.

use crate::QueryKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    TeamCreated,
    TeamUpdated,
    TeamDeleted { team_id: String },
    TaskCreated { team_id: String },
    TaskUpdated { task_id: String, team_id: String },
    TaskStatusChanged { task_id: String, team_id: String },
    TaskDeleted { task_id: String, team_id: String },
    TaskAssigned { task_id: String, team_id: String },
    AssigneesRemoved { task_id: String, team_id: String },
    InvitationsSent { team_id: String },
    InvitationAccepted,
    InvitationDeclined,
    InvitationRevoked { team_id: String },
}

impl Mutation {
    /// Key prefixes this mutation makes stale.
    pub fn invalidates(&self) -> Vec<QueryKey> {
        match self {
            // Team lists and details share the "teams" prefix.
            Mutation::TeamCreated | Mutation::TeamUpdated => vec![QueryKey::new(["teams"])],

            // A removed team takes its tasks and invitations with it.
            Mutation::TeamDeleted { team_id } => vec![
                QueryKey::new(["teams"]),
                QueryKey::new(["tasks", "team", team_id]),
                QueryKey::new(["tasks", "statistics", team_id]),
                QueryKey::new(["invites", "team", team_id]),
            ],

            Mutation::TaskCreated { team_id } => vec![
                QueryKey::new(["tasks", "my-tasks"]),
                QueryKey::new(["tasks", "team", team_id]),
                QueryKey::new(["tasks", "statistics", team_id]),
            ],

            Mutation::TaskUpdated { task_id, team_id }
            | Mutation::TaskStatusChanged { task_id, team_id }
            | Mutation::TaskDeleted { task_id, team_id }
            | Mutation::TaskAssigned { task_id, team_id }
            | Mutation::AssigneesRemoved { task_id, team_id } => vec![
                QueryKey::new(["tasks", "my-tasks"]),
                QueryKey::new(["tasks", "team", team_id]),
                QueryKey::new(["tasks", "statistics", team_id]),
                QueryKey::new(["tasks", task_id]),
            ],

            Mutation::InvitationsSent { team_id } | Mutation::InvitationRevoked { team_id } => {
                vec![QueryKey::new(["invites", "team", team_id])]
            }

            // Accepting changes membership, so team queries go stale too.
            Mutation::InvitationAccepted => {
                vec![QueryKey::new(["invites"]), QueryKey::new(["teams"])]
            }

            Mutation::InvitationDeclined => vec![QueryKey::new(["invites", "my-pending"])],
        }
    }

    /// The fixed success toast for this mutation.
    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::TeamCreated => "Team created successfully!",
            Mutation::TeamUpdated => "Team updated successfully!",
            Mutation::TeamDeleted { .. } => "Team deleted successfully!",
            Mutation::TaskCreated { .. } => "Task created successfully!",
            Mutation::TaskUpdated { .. } => "Task updated successfully!",
            Mutation::TaskStatusChanged { .. } => "Task status updated!",
            Mutation::TaskDeleted { .. } => "Task deleted successfully!",
            Mutation::TaskAssigned { .. } => "Users assigned successfully!",
            Mutation::AssigneesRemoved { .. } => "Assignees removed successfully!",
            Mutation::InvitationsSent { .. } => "Invitations sent successfully!",
            Mutation::InvitationAccepted => "Invitation accepted! Welcome to the team!",
            Mutation::InvitationDeclined => "Invitation declined",
            Mutation::InvitationRevoked { .. } => "Invitation revoked!",
        }
    }
}
