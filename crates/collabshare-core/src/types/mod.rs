//! Shared value types used across CollabShare crates.

pub mod id;

pub use id::{NotificationId, ResourceId, ShareId, SpaceId, UserId};
