pub mod error;
pub mod models;
pub mod validate;


pub use error::{CoreError, CoreResult};
pub use models::auth::{AuthResponse, LoginCredentials, RegisterData};
pub use models::invite::{AcceptInvitation, DeclineInvitation, Invite, SendInvitations};
pub use models::invite_status::InviteStatus;
pub use models::task::{
    AssignTask, CreateTask, RemoveAssignees, Task, TaskFilters, TaskStatistics, UpdateTask,
    UpdateTaskStatus,
};
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::team::{CreateTeam, Team, TeamMember, UpdateTeam};
pub use models::team_role::TeamRole;
pub use models::user::User;
pub use validate::FieldErrors;
