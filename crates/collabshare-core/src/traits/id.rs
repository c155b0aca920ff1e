//! Injectable identifier generation.

use uuid::Uuid;

/// Source of fresh UUIDs for newly created records.
///
/// Injected instead of calling `Uuid::new_v4()` directly so that tests
/// can supply deterministic values.
pub trait IdGenerator: Send + Sync + 'static {
    /// Produce the next identifier.
    fn next(&self) -> Uuid;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next(&self) -> Uuid {
        Uuid::new_v4()
    }
}
