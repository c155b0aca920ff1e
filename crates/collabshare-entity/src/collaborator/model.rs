//! Collaborator identity model.

use serde::{Deserialize, Serialize};

/// Identity of a principal involved in a share — the grantee or the
/// resource owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Unique handle (login name) of the principal.
    pub name: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Additional contact information, e.g. an email address.
    pub additional_info: Option<String>,
}

impl Collaborator {
    /// Create a collaborator without additional contact info.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            additional_info: None,
        }
    }

    /// Attach additional contact information.
    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let collaborator =
            Collaborator::new("brian", "Brian Murphy").with_additional_info("brian@example.org");
        assert_eq!(collaborator.name, "brian");
        assert_eq!(collaborator.display_name, "Brian Murphy");
        assert_eq!(
            collaborator.additional_info.as_deref(),
            Some("brian@example.org")
        );
    }
}
