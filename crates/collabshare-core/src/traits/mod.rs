//! Core traits defined in `collabshare-core` and implemented by other crates.

pub mod events;
pub mod id;
pub mod service;

pub use events::ShareEventSink;
pub use id::{IdGenerator, UuidGenerator};
pub use service::Service;
