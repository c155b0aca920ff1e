//! Share permission and role domain entities.

pub mod model;
pub mod role;

pub use model::SharePermission;
pub use role::ShareRole;
