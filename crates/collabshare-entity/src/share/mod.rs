//! Share domain entities.

pub mod model;
pub mod share_type;

pub use model::{ShareEntry, ShareExpiration};
pub use share_type::ShareType;
