//! Server-state cache: queries share one in-flight request and one cached
//! result per key; mutations invalidate the keys they affect through a
//! single inspectable table.

mod cache;
mod invalidation;
mod key;
mod resources;

#[cfg(test)]
mod tests;

pub use cache::QueryCache;
pub use invalidation::Mutation;
pub use key::QueryKey;
pub use resources::{Invites, Tasks, Teams};
