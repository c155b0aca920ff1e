//! Share role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::SharePermission;

/// Named permission bundle assigned to a share.
///
/// Roles are ordered by privilege level: Manager > Editor > Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
    /// Read-only access.
    Viewer,
    /// Can view and modify content.
    Editor,
    /// Can view, modify, and manage shares.
    Manager,
}

impl ShareRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Manager => 3,
            Self::Editor => 2,
            Self::Viewer => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &ShareRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// The canonical set of fine-grained permissions implied by this role.
    ///
    /// A role change always replaces a share's permissions with this set
    /// so that role and permissions never drift apart.
    pub fn canonical_permissions(&self) -> &'static [SharePermission] {
        match self {
            Self::Viewer => &[SharePermission::Read],
            Self::Editor => &[
                SharePermission::Read,
                SharePermission::Create,
                SharePermission::Update,
                SharePermission::Delete,
            ],
            Self::Manager => &[
                SharePermission::Read,
                SharePermission::Create,
                SharePermission::Update,
                SharePermission::Delete,
                SharePermission::Share,
            ],
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for ShareRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareRole {
    type Err = collabshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "manager" => Ok(Self::Manager),
            _ => Err(collabshare_core::AppError::validation(format!(
                "Invalid share role: '{s}'. Expected one of: viewer, editor, manager"
            ))),
        }
    }
}
