use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TaskCommands {
    /// List tasks assigned to or created by you
    Mine {
        /// Filter by status: pending, in_progress, completed
        #[arg(long, value_parser = ["pending", "in_progress", "completed"])]
        status: Option<String>,

        /// Filter by priority: low, medium, high
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Full-text search over title and description
        #[arg(long)]
        search: Option<String>,

        /// Due on or after (YYYY-MM-DD)
        #[arg(long)]
        due_from: Option<String>,

        /// Due on or before (YYYY-MM-DD)
        #[arg(long)]
        due_to: Option<String>,
    },

    /// List a team's tasks
    Team {
        /// Team UUID
        team_id: String,

        /// Filter by status: pending, in_progress, completed
        #[arg(long, value_parser = ["pending", "in_progress", "completed"])]
        status: Option<String>,

        /// Filter by priority: low, medium, high
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Full-text search over title and description
        #[arg(long)]
        search: Option<String>,
    },

    /// Task counts for a team
    Stats {
        /// Team UUID
        team_id: String,
    },

    /// Get a task by UUID
    Get {
        /// Task UUID
        uuid: String,
    },

    /// Create a task
    Create {
        /// Team UUID
        #[arg(long)]
        team_id: String,

        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high (default: medium)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Initial status (default: pending)
        #[arg(long, value_parser = ["pending", "in_progress", "completed"])]
        status: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,

        /// User IDs to assign (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<String>,
    },

    /// Update a task
    Update {
        /// Task UUID
        uuid: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority: low, medium, high
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// New status: pending, in_progress, completed
        #[arg(long, value_parser = ["pending", "in_progress", "completed"])]
        status: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },

    /// Change only the status
    Status {
        /// Task UUID
        uuid: String,

        /// New status: pending, in_progress, completed
        #[arg(value_parser = ["pending", "in_progress", "completed"])]
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task UUID
        uuid: String,

        /// Owning team UUID (for precise cache invalidation)
        #[arg(long)]
        team_id: String,
    },

    /// Assign users to a task
    Assign {
        /// Task UUID
        uuid: String,

        /// User IDs to assign (repeatable)
        #[arg(long = "user", required = true)]
        users: Vec<String>,
    },

    /// Remove assignees from a task
    Unassign {
        /// Task UUID
        uuid: String,

        /// User IDs to remove (repeatable)
        #[arg(long = "user", required = true)]
        users: Vec<String>,
    },
}
