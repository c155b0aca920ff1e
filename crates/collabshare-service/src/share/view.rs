//! Presentation contracts for a collaborator list entry.
//!
//! Pure view model — no rendering. The hosting UI maps these values onto
//! widgets; the guarantees here are what the rest of the application
//! relies on (which indicator to draw, when edit affordances exist at
//! all, when expiration and inheritance markers appear).

use serde::{Deserialize, Serialize};

use collabshare_entity::permission::{SharePermission, ShareRole};
use collabshare_entity::share::ShareEntry;

// NOTE: the indicator enum borrows the share type's static name, so it
// derives `Serialize` only.

/// Route to the parent folder a share was inherited from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRoute {
    /// Drive alias and item path of the parent resource.
    pub drive_alias_and_item: String,
}

/// Visual indicator shown next to a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CollaboratorIndicator {
    /// Personal avatar, keyed by the collaborator's identity.
    Avatar {
        /// The collaborator's handle.
        user_id: String,
        /// The collaborator's display name.
        user_name: String,
    },
    /// Generic icon keyed by the share type's symbolic name.
    TypeIcon {
        /// Symbolic share-type name.
        name: &'static str,
    },
}

/// Interactive edit affordances for a modifiable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditControls {
    /// Current role, preselected in the role control.
    pub role: ShareRole,
    /// Permissions listed in the access-details control.
    pub access_details: Vec<SharePermission>,
}

/// View model for one collaborator's row in the share list.
#[derive(Debug, Clone)]
pub struct CollaboratorListItem {
    entry: ShareEntry,
    modifiable: bool,
    shared_parent_route: Option<ParentRoute>,
}

impl CollaboratorListItem {
    /// Builds the view model for an entry.
    ///
    /// `modifiable` is decided by the caller (ownership, backend
    /// capabilities); `shared_parent_route` is present when the share was
    /// inherited from a parent folder rather than set directly.
    pub fn new(
        entry: ShareEntry,
        modifiable: bool,
        shared_parent_route: Option<ParentRoute>,
    ) -> Self {
        Self {
            entry,
            modifiable,
            shared_parent_route,
        }
    }

    /// The underlying share entry.
    pub fn entry(&self) -> &ShareEntry {
        &self.entry
    }

    /// Indicator to draw: a personal avatar for user and space shares,
    /// a generic type icon for everything else.
    pub fn indicator(&self) -> CollaboratorIndicator {
        if self.entry.share_type.is_personal() {
            CollaboratorIndicator::Avatar {
                user_id: self.entry.collaborator.name.clone(),
                user_name: self.entry.collaborator.display_name.clone(),
            }
        } else {
            CollaboratorIndicator::TypeIcon {
                name: self.entry.share_type.as_str(),
            }
        }
    }

    /// The collaborator's display name.
    pub fn display_name(&self) -> &str {
        &self.entry.collaborator.display_name
    }

    /// Additional collaborator info (e.g. contact address), if any.
    pub fn additional_info(&self) -> Option<&str> {
        self.entry.collaborator.additional_info.as_deref()
    }

    /// Whether the expiration indicator is shown. Present exactly when
    /// the entry carries an expiration date.
    pub fn shows_expiration(&self) -> bool {
        self.entry.has_expiration()
    }

    /// Interactive edit affordances.
    ///
    /// `None` when the entry is not modifiable — the controls are absent
    /// from the interactive surface, not merely disabled.
    pub fn edit_controls(&self) -> Option<EditControls> {
        self.modifiable.then(|| EditControls {
            role: self.entry.role,
            access_details: self.entry.permissions.clone(),
        })
    }

    /// Inheritance indicator, present when the share comes from a parent
    /// folder.
    pub fn inheritance_indicator(&self) -> Option<&ParentRoute> {
        self.shared_parent_route.as_ref()
    }
}
