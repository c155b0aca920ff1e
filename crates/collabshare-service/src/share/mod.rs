//! Share management — update dispatch and presentation contracts.

pub mod service;
pub mod view;

pub use service::ShareUpdateService;
pub use view::{CollaboratorIndicator, CollaboratorListItem, ParentRoute};
