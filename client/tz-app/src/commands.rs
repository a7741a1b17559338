use crate::{
    auth_commands::AuthCommands, invite_commands::InviteCommands, task_commands::TaskCommands,
    team_commands::TeamCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Team operations
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Invitation operations
    Invite {
        #[command(subcommand)]
        action: InviteCommands,
    },
}
