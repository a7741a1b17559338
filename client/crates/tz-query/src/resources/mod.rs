//! Per-resource handles pairing cached queries with invalidating mutations.

mod invites;
mod tasks;
mod teams;

pub use invites::Invites;
pub use tasks::Tasks;
pub use teams::Teams;

use tz_core::TaskFilters;

/// Stable fingerprint of a filter set for use as a key segment. Struct
/// fields serialize in declaration order, so equal filters always produce
/// the same segment.
pub(crate) fn filters_segment(filters: &TaskFilters) -> String {
    serde_json::to_string(filters).unwrap_or_else(|_| String::from("{}"))
}
