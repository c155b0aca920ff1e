//! Share update service.
//!
//! Translates a user-initiated edit into exactly one backend call and
//! turns any failure into a single user-visible notification, without
//! leaving the UI in an inconsistent state.

use std::sync::Arc;

use tracing::{error, info};

use collabshare_core::AppResult;
use collabshare_core::events::{DomainEvent, ShareEvent};
use collabshare_core::traits::{IdGenerator, Service, ShareEventSink};
use collabshare_entity::notification::Notification;
use collabshare_entity::permission::{SharePermission, ShareRole};
use collabshare_entity::share::{ShareEntry, ShareExpiration};

use crate::context::RequestContext;
use crate::ports::{NotificationSink, SharePersistenceGateway};

/// Notification title shown when a share edit fails.
const EDIT_ERROR_TITLE: &str = "Error while editing the share.";

/// Applies collaborator share changes through the persistence gateway.
///
/// Each operation issues at most one persistence call, selected solely by
/// the entry's share type: space memberships go through the
/// space-membership path, everything else through the generic
/// resource-share path. Failures are absorbed here — they never propagate
/// to the caller; the user sees exactly one notification and the
/// in-memory entry stays untouched, so retrying is idempotent.
pub struct ShareUpdateService {
    /// Persistence gateway for share updates.
    gateway: Arc<dyn SharePersistenceGateway>,
    /// Sink for user-visible notifications.
    notifier: Arc<dyn NotificationSink>,
    /// Sink for upward domain events.
    events: Arc<dyn ShareEventSink>,
    /// Identifier source for notifications.
    ids: Arc<dyn IdGenerator>,
}

impl Service for ShareUpdateService {}

impl ShareUpdateService {
    /// Creates a new share update service.
    pub fn new(
        gateway: Arc<dyn SharePersistenceGateway>,
        notifier: Arc<dyn NotificationSink>,
        events: Arc<dyn ShareEventSink>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            events,
            ids,
        }
    }

    /// Changes the role (and with it the permission set) of a share.
    ///
    /// The updated entry equals `entry` with `role` and `permissions`
    /// replaced as a pair; callers pass the permission set implied by the
    /// new role. On success the host receives a
    /// [`ShareEvent::RoleChanged`] and should refresh the entry from the
    /// backend's authoritative state.
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        entry: &ShareEntry,
        role: ShareRole,
        permissions: Vec<SharePermission>,
    ) {
        let updated = entry.with_role(role, permissions);

        match self.save_share_changes(&updated).await {
            Ok(()) => {
                info!(
                    user = %ctx.username,
                    share_id = %entry.id,
                    role = %role,
                    "Share role updated"
                );
                self.publish(ctx, ShareEvent::RoleChanged {
                    share_id: entry.id,
                    role: role.as_str().to_string(),
                });
            }
            Err(e) => self.notify_edit_failure(ctx, &updated, &e),
        }
    }

    /// Changes the expiration date of a share.
    ///
    /// The call is always issued when this operation is invoked —
    /// [`ShareExpiration::Never`] is an explicit "clear the date", not an
    /// omitted field.
    pub async fn change_expiration(
        &self,
        ctx: &RequestContext,
        entry: &ShareEntry,
        expiration: ShareExpiration,
    ) {
        let updated = entry.with_expiration(expiration);

        match self.save_share_changes(&updated).await {
            Ok(()) => {
                info!(
                    user = %ctx.username,
                    share_id = %entry.id,
                    expires = ?updated.expires,
                    "Share expiration updated"
                );
                self.publish(ctx, ShareEvent::ExpirationChanged {
                    share_id: entry.id,
                    expires: updated.expires,
                });
            }
            Err(e) => self.notify_edit_failure(ctx, &updated, &e),
        }
    }

    /// Requests removal of a share.
    ///
    /// Deletion is not dispatch-routed here: the hosting context owns the
    /// collaborator list and performs the actual delete, so this only
    /// publishes the intent upward.
    pub fn remove_share(&self, ctx: &RequestContext, entry: &ShareEntry) {
        info!(
            user = %ctx.username,
            share_id = %entry.id,
            collaborator = %entry.collaborator.name,
            "Share removal requested"
        );
        self.publish(ctx, ShareEvent::RemovalRequested {
            share_id: entry.id,
            collaborator: entry.collaborator.name.clone(),
        });
    }

    /// Wraps a payload with event metadata and hands it to the host.
    fn publish(&self, ctx: &RequestContext, payload: ShareEvent) {
        self.events
            .publish(DomainEvent::new(Some(ctx.user_id.into_uuid()), payload));
    }

    /// Dispatches the updated entry to the persistence path selected by
    /// its share type. Exactly one of the two gateway calls is issued.
    async fn save_share_changes(&self, updated: &ShareEntry) -> AppResult<()> {
        if updated.share_type.uses_space_membership() {
            self.gateway.update_space_member(updated).await
        } else {
            self.gateway.update_share(updated).await
        }
    }

    /// Absorbs a persistence failure: one log line, one notification.
    ///
    /// All failure causes are reported identically at this layer; finer
    /// categories belong to the gateway.
    fn notify_edit_failure(
        &self,
        ctx: &RequestContext,
        updated: &ShareEntry,
        e: &collabshare_core::AppError,
    ) {
        error!(
            user = %ctx.username,
            share_id = %updated.id,
            error = %e,
            "Failed to save share changes"
        );
        self.notifier.show(Notification::error(
            self.ids.next().into(),
            EDIT_ERROR_TITLE,
            e.message.clone(),
        ));
    }
}
