#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Tier;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

const DEFAULT_TIMEOUT_MILLIS: u64 = 5000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Alert payload handed to the notifier. `duration_ms = None` means the
/// notification persists instead of timing out, which is reserved for the
/// emergency tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration_ms: Option<u64>,
}

impl Notification {
    pub fn for_tier(tier: Tier) -> Notification {
        let timeout = Config::get(ConfigKey::NotificationTimeoutMillis)
            .parse::<u64>()
            .unwrap_or(DEFAULT_TIMEOUT_MILLIS);

        match tier {
            Tier::Emergency => {
                return Notification {
                    title: "Emergency Support Activated".to_string(),
                    description: "Connecting you with a crisis counselor immediately.".to_string(),
                    severity: Severity::Error,
                    duration_ms: None,
                };
            }
            Tier::Urgent => {
                return Notification {
                    title: "Priority Support".to_string(),
                    description: "A counselor will be with you shortly.".to_string(),
                    severity: Severity::Warning,
                    duration_ms: Some(timeout),
                };
            }
            Tier::Regular => {
                return Notification {
                    title: "Message Received".to_string(),
                    description: "We'll schedule a counseling session for you.".to_string(),
                    severity: Severity::Info,
                    duration_ms: Some(timeout),
                };
            }
        }
    }
}

/// A notification currently on screen, with its dismissal deadline
/// resolved against the clock it was raised on.
pub struct ActiveNotification {
    pub notification: Notification,
    expires_at: Option<Instant>,
}

impl ActiveNotification {
    pub fn new(notification: Notification, raised_at: Instant) -> ActiveNotification {
        let expires_at = notification
            .duration_ms
            .map(|ms| return raised_at + Duration::from_millis(ms));

        return ActiveNotification {
            notification,
            expires_at,
        };
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        if let Some(expires_at) = self.expires_at {
            return now >= expires_at;
        }

        return false;
    }

    /// Emergency alerts stay up for the rest of the conversation. Everything
    /// else can be dismissed early with Esc.
    pub fn is_dismissible(&self) -> bool {
        return self.notification.severity != Severity::Error;
    }
}
