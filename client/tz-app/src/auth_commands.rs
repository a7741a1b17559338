use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AuthCommands {
    /// Log in and persist the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account (log in manually afterwards)
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        password_confirmation: String,
    },

    /// End the session (best-effort server notify)
    Logout,

    /// Show the current session user
    Whoami,
}
