//! Client-side input validation.
//!
//! Produces the same field-name -> messages map shape the server returns for
//! 422 responses, so forms render local and remote failures identically.

use crate::{CoreError, CoreResult, CreateTask, LoginCredentials, RegisterData, SendInvitations, UpdateTask};

use std::collections::HashMap;
use std::panic::Location;

use error_location::ErrorLocation;

/// Field-name to ordered message list, matching the 422 envelope shape.
pub type FieldErrors = HashMap<String, Vec<String>>;

const MIN_PASSWORD_LENGTH: usize = 6;
const MIN_NAME_LENGTH: usize = 2;
const MIN_TEAM_NAME_LENGTH: usize = 2;
const MAX_TEAM_NAME_LENGTH: usize = 100;
const MIN_TASK_TITLE_LENGTH: usize = 3;
const MAX_TASK_TITLE_LENGTH: usize = 255;

/// Minimal structural check: one `@`, non-empty local part, dotted domain.
/// The server remains the authority; this only catches obvious typos early.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[track_caller]
pub fn validate_login(credentials: &LoginCredentials) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    if !is_valid_email(&credentials.email) {
        push(&mut errors, "email", "Invalid email address");
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        push(&mut errors, "password", "Password must be at least 6 characters");
    }
    finish(errors)
}

#[track_caller]
pub fn validate_register(data: &RegisterData) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    if data.name.chars().count() < MIN_NAME_LENGTH {
        push(&mut errors, "name", "Name must be at least 2 characters");
    }
    if !is_valid_email(&data.email) {
        push(&mut errors, "email", "Invalid email address");
    }
    if data.password.chars().count() < MIN_PASSWORD_LENGTH {
        push(&mut errors, "password", "Password must be at least 6 characters");
    }
    if data.password != data.password_confirmation {
        push(&mut errors, "password_confirmation", "Passwords don't match");
    }
    finish(errors)
}

#[track_caller]
pub fn validate_team_name(name: &str) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    check_team_name(&mut errors, name);
    finish(errors)
}

#[track_caller]
pub fn validate_create_task(data: &CreateTask) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    check_task_title(&mut errors, &data.title);
    if data.team_id.is_empty() {
        push(&mut errors, "team_id", "Team is required");
    }
    finish(errors)
}

#[track_caller]
pub fn validate_update_task(data: &UpdateTask) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    if let Some(ref title) = data.title {
        check_task_title(&mut errors, title);
    }
    finish(errors)
}

#[track_caller]
pub fn validate_send_invitations(data: &SendInvitations) -> CoreResult<()> {
    let mut errors = FieldErrors::new();
    if data.team_id.is_empty() {
        push(&mut errors, "team_id", "Team is required");
    }
    if data.emails.is_empty() {
        push(&mut errors, "emails", "At least one email is required");
    }
    for email in &data.emails {
        if !is_valid_email(email) {
            push(&mut errors, "emails", "Invalid email address");
        }
    }
    finish(errors)
}

fn check_team_name(errors: &mut FieldErrors, name: &str) {
    let len = name.chars().count();
    if len < MIN_TEAM_NAME_LENGTH {
        push(errors, "name", "Team name must be at least 2 characters");
    } else if len > MAX_TEAM_NAME_LENGTH {
        push(errors, "name", "Team name must be at most 100 characters");
    }
}

fn check_task_title(errors: &mut FieldErrors, title: &str) {
    let len = title.chars().count();
    if len < MIN_TASK_TITLE_LENGTH {
        push(errors, "title", "Title must be at least 3 characters");
    } else if len > MAX_TASK_TITLE_LENGTH {
        push(errors, "title", "Title must be at most 255 characters");
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

#[track_caller]
fn finish(errors: FieldErrors) -> CoreResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
