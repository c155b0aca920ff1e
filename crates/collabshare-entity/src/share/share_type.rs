//! Share type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of share.
///
/// The type is fixed for the lifetime of a share record — changing it
/// requires deleting and recreating the share. It selects both the
/// persistence path (space membership vs. generic resource share) and the
/// visual indicator shown for the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareType {
    /// A share directly with another user.
    User,
    /// A share with a user group.
    Group,
    /// Membership in a space (drive-like container).
    Space,
    /// A share with a user on a federated instance.
    Federated,
    /// A link-based share.
    Link,
    /// A share with a guest account.
    Guest,
}

impl ShareType {
    /// All known share types.
    pub const ALL: [ShareType; 6] = [
        Self::User,
        Self::Group,
        Self::Space,
        Self::Federated,
        Self::Link,
        Self::Guest,
    ];

    /// Whether updates to this share go through the space-membership
    /// persistence path.
    ///
    /// Every non-space variant routes to the generic resource-share path;
    /// the match is exhaustive so future variants must choose explicitly.
    pub fn uses_space_membership(&self) -> bool {
        match self {
            Self::Space => true,
            Self::User | Self::Group | Self::Federated | Self::Link | Self::Guest => false,
        }
    }

    /// Whether the collaborator is shown with a personal avatar rather
    /// than a generic type-indicator icon.
    pub fn is_personal(&self) -> bool {
        matches!(self, Self::User | Self::Space)
    }

    /// Return the share type as a lowercase string.
    ///
    /// Also used as the symbolic key for the generic type-indicator icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Space => "space",
            Self::Federated => "federated",
            Self::Link => "link",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareType {
    type Err = collabshare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "group" => Ok(Self::Group),
            "space" => Ok(Self::Space),
            "federated" => Ok(Self::Federated),
            "link" => Ok(Self::Link),
            "guest" => Ok(Self::Guest),
            _ => Err(collabshare_core::AppError::validation(format!(
                "Invalid share type: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_space_uses_membership_path() {
        for share_type in ShareType::ALL {
            assert_eq!(
                share_type.uses_space_membership(),
                share_type == ShareType::Space
            );
        }
    }

    #[test]
    fn test_personal_indicator_types() {
        assert!(ShareType::User.is_personal());
        assert!(ShareType::Space.is_personal());
        for share_type in [
            ShareType::Group,
            ShareType::Federated,
            ShareType::Link,
            ShareType::Guest,
        ] {
            assert!(!share_type.is_personal());
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for share_type in ShareType::ALL {
            assert_eq!(share_type.as_str().parse::<ShareType>().unwrap(), share_type);
        }
        assert!("mail".parse::<ShareType>().is_err());
    }
}
