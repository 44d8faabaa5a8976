//! Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller roles. GUEST is never stored; it stands for "no usable token".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Guest,
    Viewer,
    Analyst,
}

impl Role {
    /// Role code as stored in the `roles.code` column
    pub fn code(&self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::Viewer => "VIEWER",
            Role::Analyst => "ANALYST",
        }
    }

    /// Role assigned to newly registered users
    pub const fn default_for_registration() -> Role {
        Role::Viewer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role code: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GUEST" => Ok(Role::Guest),
            "VIEWER" => Ok(Role::Viewer),
            "ANALYST" => Ok(Role::Analyst),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
