//! Response envelope shapes.
//!
//! Every API response wraps its payload as `{data, message?, errors?}`.
//! List endpoints may additionally nest a paginated `{data: [...], meta}`
//! under `.data` - which endpoints do is a fixed property of the backend,
//! declared per endpoint by deserializing into [`ListPayload`].

use tz_core::FieldErrors;

use serde::Deserialize;

/// The `{data, message?, errors?}` wrapper on every response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// One page of a paginated list.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

/// The two list payload shapes the backend serves: a paginator object or a
/// bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paginated(Paginated<T>),
    Flat(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.data,
            Self::Flat(items) => items,
        }
    }
}

/// Body of a failed response; both fields are optional because error bodies
/// are not guaranteed to carry the envelope.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}
