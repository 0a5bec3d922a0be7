use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Notification;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotifierName {
    Banner,
    None,
}

impl NotifierName {
    pub fn parse(text: String) -> Option<NotifierName> {
        return NotifierName::iter().find(|e| return e.to_string() == text);
    }
}

#[async_trait]
pub trait Notifier {
    /// Returns the name of the notifier.
    fn name(&self) -> NotifierName;

    /// Used at startup to verify the notifier is able to surface alerts.
    async fn health_check(&self) -> Result<()>;

    /// Surfaces a tier alert to the user. Timed dismissal is owned by
    /// whatever ends up displaying the notification, not by the caller.
    async fn notify(&self, notification: Notification) -> Result<()>;
}

pub type NotifierBox = Box<dyn Notifier + Send + Sync>;
