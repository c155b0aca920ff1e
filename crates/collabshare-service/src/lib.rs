//! # collabshare-service
//!
//! Business logic service layer for CollabShare. The share-update service
//! translates user-initiated edits into exactly one backend call each and
//! turns failures into a single user-visible notification.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the port traits defined
//! in [`ports`].

pub mod context;
pub mod ports;
pub mod share;
pub mod title;

pub use context::RequestContext;
pub use ports::{NotificationSink, SharePersistenceGateway};
pub use share::{CollaboratorListItem, ShareUpdateService};
