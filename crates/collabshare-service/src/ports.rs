//! Ports implemented by the hosting application.
//!
//! The service layer never reaches for ambient state; everything it needs
//! from the outside world comes in through these traits at construction
//! time.

use async_trait::async_trait;

use collabshare_core::AppResult;
use collabshare_entity::notification::Notification;
use collabshare_entity::share::ShareEntry;

/// Persists share changes to the backend.
///
/// The two entry points are mutually exclusive per operation: space
/// memberships are updated through [`update_space_member`], every other
/// share type through [`update_share`]. Transport, retries, and timeouts
/// live behind this trait.
///
/// [`update_share`]: SharePersistenceGateway::update_share
/// [`update_space_member`]: SharePersistenceGateway::update_space_member
#[async_trait]
pub trait SharePersistenceGateway: Send + Sync {
    /// Persist role/permission/expiration changes for a non-space share.
    async fn update_share(&self, entry: &ShareEntry) -> AppResult<()>;

    /// Persist the analogous change for a space membership.
    async fn update_space_member(&self, entry: &ShareEntry) -> AppResult<()>;
}

/// Displays a message to the user.
///
/// Synchronous and fire-and-forget; implementations must not block.
pub trait NotificationSink: Send + Sync {
    /// Show a notification to the user.
    fn show(&self, notification: Notification);
}
