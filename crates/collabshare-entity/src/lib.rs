//! # collabshare-entity
//!
//! Domain entity models for CollabShare. Every struct in this crate
//! represents a share record or a domain value object as delivered by
//! the data layer. All entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`.

pub mod collaborator;
pub mod notification;
pub mod permission;
pub mod share;
