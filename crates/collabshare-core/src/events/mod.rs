//! Domain events emitted by CollabShare operations.
//!
//! Events are published through an injected [`crate::traits::ShareEventSink`]
//! and consumed by the hosting application — typically to refresh the
//! collaborator list or to drive the actual deletion of a share.

pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use share::ShareEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: ShareEvent,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: ShareEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShareId;

    #[test]
    fn test_new_attaches_metadata() {
        let actor = Uuid::new_v4();
        let event = DomainEvent::new(
            Some(actor),
            ShareEvent::RemovalRequested {
                share_id: ShareId::new(),
                collaborator: "brian".to_string(),
            },
        );
        assert_eq!(event.actor_id, Some(actor));
        assert_ne!(event.id, Uuid::nil());
    }
}
