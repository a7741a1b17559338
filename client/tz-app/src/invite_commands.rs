use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum InviteCommands {
    /// Invite email addresses to a team
    Send {
        /// Team UUID
        #[arg(long)]
        team_id: String,

        /// Email address to invite (repeatable)
        #[arg(long = "email", required = true)]
        emails: Vec<String>,

        /// Role the invitees join as (default: member)
        #[arg(long)]
        role: Option<String>,
    },

    /// List invitations sent for a team
    Team {
        /// Team UUID
        team_id: String,
    },

    /// List invitations waiting on you
    Pending,

    /// Accept an invitation
    Accept {
        /// Invitation token
        token: String,
    },

    /// Decline an invitation
    Decline {
        /// Invitation token
        token: String,
    },

    /// Revoke a pending invitation
    Revoke {
        /// Invitation ID
        id: String,

        /// Owning team UUID (for precise cache invalidation)
        #[arg(long)]
        team_id: String,
    },
}
