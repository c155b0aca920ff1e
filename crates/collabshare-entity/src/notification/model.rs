//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use collabshare_core::types::NotificationId;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something went wrong and the user should know.
    Error,
}

/// A message to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Severity level.
    pub severity: Severity,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an error notification.
    pub fn error(id: NotificationId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an informational notification.
    pub fn info(id: NotificationId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
