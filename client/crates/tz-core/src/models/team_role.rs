use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Membership role within a team. Invitations carry a free-form role string
/// until accepted; memberships come back as one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Lead,
    Admin,
    Member,
}

impl TeamRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lead => "lead",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl FromStr for TeamRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "lead" => Ok(Self::Lead),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(CoreError::InvalidTeamRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
