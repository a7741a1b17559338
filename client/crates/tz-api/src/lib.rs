//! Taskzilla HTTP request pipeline.
//!
//! Every remote call goes through [`ApiClient`]: the outgoing stage attaches
//! the current bearer token, the incoming stage normalizes failures into
//! [`ApiError`] - the only error shape the rest of the client ever sees.

mod client;
mod endpoints;
mod envelope;
mod error;
mod notify;
mod token;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use envelope::{Envelope, ListPayload, Paginated, PaginationMeta};
pub use error::{ApiError, ApiResult};
pub use notify::{LogNotifier, Notifier};
pub use token::{IgnoreExpiry, NoToken, SessionExpiry, TokenProvider};
