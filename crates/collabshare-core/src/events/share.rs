//! Share-related domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ShareId;

/// Events related to share-update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A collaborator's role was changed and persisted.
    RoleChanged {
        /// The share ID.
        share_id: ShareId,
        /// The new role name.
        role: String,
    },
    /// A share's expiration date was changed and persisted.
    ExpirationChanged {
        /// The share ID.
        share_id: ShareId,
        /// The new expiration date (`None` = never expires).
        expires: Option<DateTime<Utc>>,
    },
    /// The user requested removal of a share.
    ///
    /// The hosting context owns list membership and performs the actual
    /// deletion; this event only carries the intent upward.
    RemovalRequested {
        /// The share ID.
        share_id: ShareId,
        /// Handle of the collaborator whose share should be removed.
        collaborator: String,
    },
}
