//! Share entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use collabshare_core::types::ShareId;

use crate::collaborator::Collaborator;
use crate::permission::{SharePermission, ShareRole};

use super::share_type::ShareType;

/// An explicit expiration change request.
///
/// Distinguishes "clear the expiration" from "no change requested" — a
/// plain `Option` in an update payload cannot tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "date")]
pub enum ShareExpiration {
    /// The share expires at the given point in time.
    At(DateTime<Utc>),
    /// The share never expires.
    Never,
}

impl ShareExpiration {
    /// Convert to the optional timestamp stored on the entry.
    pub fn into_option(self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(date) => Some(date),
            Self::Never => None,
        }
    }
}

/// One collaborator's share on a resource, as listed by the data layer.
///
/// Entries are constructed by the data layer when shares are listed;
/// update operations only derive modified copies and never create or
/// delete entries. `share_type` is immutable for the lifetime of an
/// entry — no update method touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareEntry {
    /// Unique share record identifier.
    pub id: ShareId,
    /// Type of share; fixed at creation.
    pub share_type: ShareType,
    /// The grantee's identity.
    pub collaborator: Collaborator,
    /// The resource owner's identity.
    pub owner: Collaborator,
    /// Named permission bundle currently granted.
    pub role: ShareRole,
    /// Fine-grained permissions implied by `role`.
    pub permissions: Vec<SharePermission>,
    /// When the share stops being valid. `None` = never expires.
    ///
    /// Past dates are accepted here; rejecting nonsensical dates is the
    /// backend's responsibility.
    pub expires: Option<DateTime<Utc>>,
}

impl ShareEntry {
    /// Derive a copy with `role` and `permissions` replaced together.
    ///
    /// Role and permissions are always swapped as a pair to keep them
    /// mutually consistent; callers pass the permission set implied by
    /// the new role.
    pub fn with_role(&self, role: ShareRole, permissions: Vec<SharePermission>) -> Self {
        Self {
            role,
            permissions,
            ..self.clone()
        }
    }

    /// Derive a copy with `role` replaced and `permissions` set to the
    /// role's canonical set.
    pub fn with_canonical_role(&self, role: ShareRole) -> Self {
        self.with_role(role, role.canonical_permissions().to_vec())
    }

    /// Derive a copy with only the expiration replaced.
    pub fn with_expiration(&self, expiration: ShareExpiration) -> Self {
        Self {
            expires: expiration.into_option(),
            ..self.clone()
        }
    }

    /// Whether an expiration date is set.
    pub fn has_expiration(&self) -> bool {
        self.expires.is_some()
    }

    /// Whether the share has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.map(|expires| expires <= now).unwrap_or(false)
    }

    /// Whether the granted permissions include `permission`.
    pub fn can(&self, permission: SharePermission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry() -> ShareEntry {
        ShareEntry {
            id: ShareId::new(),
            share_type: ShareType::User,
            collaborator: Collaborator::new("brian", "Brian Murphy"),
            owner: Collaborator::new("marie", "Marie Curie"),
            role: ShareRole::Viewer,
            permissions: vec![SharePermission::Read],
            expires: None,
        }
    }

    #[test]
    fn test_with_role_replaces_both_fields() {
        let original = entry();
        let updated = original.with_canonical_role(ShareRole::Editor);

        assert_eq!(updated.role, ShareRole::Editor);
        assert_eq!(
            updated.permissions,
            ShareRole::Editor.canonical_permissions().to_vec()
        );
        // Everything else, including the share type, stays untouched.
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.share_type, original.share_type);
        assert_eq!(original.role, ShareRole::Viewer);
    }

    #[test]
    fn test_with_expiration_set_and_clear() {
        let date = Utc::now() + Duration::days(3);
        let updated = entry().with_expiration(ShareExpiration::At(date));
        assert_eq!(updated.expires, Some(date));
        assert!(updated.has_expiration());

        let cleared = updated.with_expiration(ShareExpiration::Never);
        assert_eq!(cleared.expires, None);
        assert!(!cleared.has_expiration());
    }

    #[test]
    fn test_past_expiration_is_accepted_but_expired() {
        let past = Utc::now() - Duration::days(1);
        let updated = entry().with_expiration(ShareExpiration::At(past));
        assert!(updated.is_expired(Utc::now()));
    }

    #[test]
    fn test_can_checks_permission_set() {
        let viewer = entry();
        assert!(viewer.can(SharePermission::Read));
        assert!(!viewer.can(SharePermission::Update));
    }
}
