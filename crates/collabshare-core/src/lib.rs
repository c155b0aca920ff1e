//! # collabshare-core
//!
//! Core crate for CollabShare. Contains traits, configuration schemas,
//! typed identifiers, domain events, the logging bootstrap, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other CollabShare crates.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
