//! One module per resource; each maps a typed call onto the pipeline and
//! unwraps the response envelope. The envelope depth (flat vs. paginated) is
//! declared here, per endpoint.

mod auth;
mod invites;
mod tasks;
mod teams;
