//! Share workflow configuration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Settings governing the share-update workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Role name preselected when inviting a new collaborator.
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Default number of days until a new share expires.
    ///
    /// `None` means new shares never expire unless the user picks a date.
    #[serde(default)]
    pub default_expiration_days: Option<u32>,
}

impl SharingConfig {
    /// Compute the concrete default expiration date relative to `now`.
    ///
    /// Returns `None` when no default expiration is configured.
    pub fn default_expiration(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.default_expiration_days
            .map(|days| now + Duration::days(i64::from(days)))
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_expiration_days: None,
        }
    }
}

fn default_role() -> String {
    "viewer".to_string()
}
