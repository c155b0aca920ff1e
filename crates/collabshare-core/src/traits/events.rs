//! Upward event publication.

use crate::events::DomainEvent;

/// Receives domain events emitted by share operations.
///
/// Implemented by the hosting application. Publication is synchronous and
/// fire-and-forget; implementations must not block.
pub trait ShareEventSink: Send + Sync + 'static {
    /// Publish a share event to the host.
    fn publish(&self, event: DomainEvent);
}
