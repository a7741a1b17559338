use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TeamCommands {
    /// List your teams
    List,

    /// Get a team by UUID
    Get {
        /// Team UUID
        uuid: String,
    },

    /// Create a team
    Create {
        /// Team name
        #[arg(long)]
        name: String,
    },

    /// Rename a team
    Update {
        /// Team UUID
        uuid: String,

        /// New team name
        #[arg(long)]
        name: String,
    },

    /// Delete a team
    Delete {
        /// Team UUID
        uuid: String,
    },
}
