//! tz - Taskzilla command-line client
//!
//! Renders query results as JSON on stdout and dispatches mutations; toasts
//! and logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Log in (the session persists across invocations)
//! tz auth login --email a@b.com --password secret1
//!
//! # List your teams
//! tz team list --pretty
//!
//! # Move a task
//! tz task status <uuid> completed
//! ```

mod auth_commands;
mod cli;
mod commands;
mod context;
mod error;
mod invite_commands;
mod logger;
mod task_commands;
mod team_commands;


use crate::{
    auth_commands::AuthCommands, cli::Cli, commands::Commands, context::AppContext,
    error::AppError, invite_commands::InviteCommands, task_commands::TaskCommands,
    team_commands::TeamCommands,
};

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::Parser;
use serde_json::Value;
use tz_config::Config;
use tz_core::validate::{
    validate_create_task, validate_login, validate_register, validate_send_invitations,
    validate_team_name, validate_update_task,
};
use tz_core::{
    CreateTask, CreateTeam, LoginCredentials, RegisterData, SendInvitations, TaskFilters,
    TaskPriority, TaskStatus, UpdateTask, UpdateTeam,
};
use tz_session::{RouteDecision, route_guard};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.clone().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let ctx = match AppContext::build(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Restore any persisted session before a route decision is made.
    ctx.session.hydrate();

    match run(cli.command, &ctx).await {
        Ok(Some(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            // Remote failures (other than validation) were already toasted
            // by the pipeline; don't print them twice.
            let already_toasted = e.as_api().is_some_and(|api| !api.is_validation());
            if !already_toasted {
                eprintln!("Error: {e}");
            }

            if let Some(fields) = e.field_errors() {
                for (field, messages) in fields {
                    for message in messages {
                        eprintln!("  {field}: {message}");
                    }
                }
            }

            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, ctx: &AppContext) -> Result<Option<Value>, AppError> {
    match command {
        Commands::Auth { action } => run_auth(action, ctx).await,
        Commands::Team { action } => {
            require_auth(ctx)?;
            run_team(action, ctx).await
        }
        Commands::Task { action } => {
            require_auth(ctx)?;
            run_task(action, ctx).await
        }
        Commands::Invite { action } => {
            require_auth(ctx)?;
            run_invite(action, ctx).await
        }
    }
}

/// Protected-command gate, the CLI's rendition of the route guard.
fn require_auth(ctx: &AppContext) -> Result<(), AppError> {
    match route_guard(&ctx.session.session()) {
        RouteDecision::Render => Ok(()),
        RouteDecision::Loading => Err(AppError::Guard(
            "Session is still loading. Try again.".to_string(),
        )),
        RouteDecision::RedirectToLogin => Err(AppError::Guard(
            "Not logged in. Run `tz auth login` first.".to_string(),
        )),
    }
}

async fn run_auth(action: AuthCommands, ctx: &AppContext) -> Result<Option<Value>, AppError> {
    match action {
        AuthCommands::Login { email, password } => {
            let credentials = LoginCredentials {
                email,
                password,
                remember: None,
            };
            validate_login(&credentials)?;
            ctx.session.login(&credentials).await?;
            Ok(None)
        }

        AuthCommands::Register {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let data = RegisterData {
                name,
                email,
                password,
                password_confirmation,
            };
            validate_register(&data)?;
            ctx.session.register(&data).await?;
            eprintln!("Account created. Run `tz auth login` to sign in.");
            Ok(None)
        }

        AuthCommands::Logout => {
            ctx.session.logout().await;
            // Cached server state belongs to the session that fetched it.
            ctx.cache.clear();
            Ok(None)
        }

        AuthCommands::Whoami => {
            require_auth(ctx)?;
            let session = ctx.session.session();
            Ok(Some(serde_json::to_value(session.user)?))
        }
    }
}

async fn run_team(action: TeamCommands, ctx: &AppContext) -> Result<Option<Value>, AppError> {
    match action {
        TeamCommands::List => Ok(Some(serde_json::to_value(ctx.teams.list().await?)?)),

        TeamCommands::Get { uuid } => Ok(Some(serde_json::to_value(
            ctx.teams.get(&uuid).await?,
        )?)),

        TeamCommands::Create { name } => {
            validate_team_name(&name)?;
            let team = ctx.teams.create(&CreateTeam { name }).await?;
            Ok(Some(serde_json::to_value(team)?))
        }

        TeamCommands::Update { uuid, name } => {
            validate_team_name(&name)?;
            let team = ctx.teams.update(&uuid, &UpdateTeam { name }).await?;
            Ok(Some(serde_json::to_value(team)?))
        }

        TeamCommands::Delete { uuid } => {
            ctx.teams.delete(&uuid).await?;
            Ok(None)
        }
    }
}

async fn run_task(action: TaskCommands, ctx: &AppContext) -> Result<Option<Value>, AppError> {
    match action {
        TaskCommands::Mine {
            status,
            priority,
            search,
            due_from,
            due_to,
        } => {
            let filters = TaskFilters {
                status: parse_status(status.as_deref())?,
                priority: parse_priority(priority.as_deref())?,
                team_id: None,
                search,
                due_date_from: parse_date(due_from.as_deref(), "due-from")?,
                due_date_to: parse_date(due_to.as_deref(), "due-to")?,
            };
            Ok(Some(serde_json::to_value(ctx.tasks.my(&filters).await?)?))
        }

        TaskCommands::Team {
            team_id,
            status,
            priority,
            search,
        } => {
            let filters = TaskFilters {
                status: parse_status(status.as_deref())?,
                priority: parse_priority(priority.as_deref())?,
                search,
                ..TaskFilters::default()
            };
            Ok(Some(serde_json::to_value(
                ctx.tasks.team(&team_id, &filters).await?,
            )?))
        }

        TaskCommands::Stats { team_id } => Ok(Some(serde_json::to_value(
            ctx.tasks.statistics(&team_id).await?,
        )?)),

        TaskCommands::Get { uuid } => Ok(Some(serde_json::to_value(
            ctx.tasks.get(&uuid).await?,
        )?)),

        TaskCommands::Create {
            team_id,
            title,
            description,
            priority,
            status,
            due_date,
            assignees,
        } => {
            let data = CreateTask {
                title,
                description,
                priority: parse_priority(priority.as_deref())?.unwrap_or(TaskPriority::Medium),
                status: parse_status(status.as_deref())?,
                due_date: parse_date(due_date.as_deref(), "due-date")?,
                team_id,
                assignee_ids: if assignees.is_empty() {
                    None
                } else {
                    Some(assignees)
                },
            };
            validate_create_task(&data)?;
            let task = ctx.tasks.create(&data).await?;
            Ok(Some(serde_json::to_value(task)?))
        }

        TaskCommands::Update {
            uuid,
            title,
            description,
            priority,
            status,
            due_date,
        } => {
            let data = UpdateTask {
                title,
                description,
                priority: parse_priority(priority.as_deref())?,
                status: parse_status(status.as_deref())?,
                due_date: parse_date(due_date.as_deref(), "due-date")?,
            };
            validate_update_task(&data)?;
            let task = ctx.tasks.update(&uuid, &data).await?;
            Ok(Some(serde_json::to_value(task)?))
        }

        TaskCommands::Status { uuid, status } => {
            let status = TaskStatus::from_str(&status)?;
            let task = ctx.tasks.set_status(&uuid, status).await?;
            Ok(Some(serde_json::to_value(task)?))
        }

        TaskCommands::Delete { uuid, team_id } => {
            ctx.tasks.delete(&uuid, &team_id).await?;
            Ok(None)
        }

        TaskCommands::Assign { uuid, users } => {
            let task = ctx.tasks.assign(&uuid, users).await?;
            Ok(Some(serde_json::to_value(task)?))
        }

        TaskCommands::Unassign { uuid, users } => {
            let task = ctx.tasks.unassign(&uuid, users).await?;
            Ok(Some(serde_json::to_value(task)?))
        }
    }
}

async fn run_invite(action: InviteCommands, ctx: &AppContext) -> Result<Option<Value>, AppError> {
    match action {
        InviteCommands::Send {
            team_id,
            emails,
            role,
        } => {
            let data = SendInvitations {
                team_id,
                emails,
                role,
            };
            validate_send_invitations(&data)?;
            let invites = ctx.invites.send(&data).await?;
            Ok(Some(serde_json::to_value(invites)?))
        }

        InviteCommands::Team { team_id } => Ok(Some(serde_json::to_value(
            ctx.invites.team(&team_id).await?,
        )?)),

        InviteCommands::Pending => Ok(Some(serde_json::to_value(
            ctx.invites.pending().await?,
        )?)),

        InviteCommands::Accept { token } => {
            ctx.invites.accept(&token).await?;
            Ok(None)
        }

        InviteCommands::Decline { token } => {
            ctx.invites.decline(&token).await?;
            Ok(None)
        }

        InviteCommands::Revoke { id, team_id } => {
            ctx.invites.revoke(&id, &team_id).await?;
            Ok(None)
        }
    }
}

fn parse_status(value: Option<&str>) -> Result<Option<TaskStatus>, AppError> {
    Ok(value.map(TaskStatus::from_str).transpose()?)
}

fn parse_priority(value: Option<&str>) -> Result<Option<TaskPriority>, AppError> {
    Ok(value.map(TaskPriority::from_str).transpose()?)
}

fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::Argument(format!("{field} must be a YYYY-MM-DD date, got {s:?}"))
            }),
    }
}
