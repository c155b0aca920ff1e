//! Collaborator identity entities.

pub mod model;

pub use model::Collaborator;
