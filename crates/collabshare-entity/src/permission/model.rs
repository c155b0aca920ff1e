//! Fine-grained share permission enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single fine-grained permission carried by a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    /// Read the resource and its metadata.
    Read,
    /// Create new content inside the resource.
    Create,
    /// Modify existing content.
    Update,
    /// Delete the resource or its content.
    Delete,
    /// Re-share the resource with other principals.
    Share,
}

impl SharePermission {
    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Share => "share",
        }
    }
}

impl fmt::Display for SharePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SharePermission {
    type Err = collabshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "share" => Ok(Self::Share),
            _ => Err(collabshare_core::AppError::validation(format!(
                "Invalid share permission: '{s}'"
            ))),
        }
    }
}
