#[cfg(test)]
#[path = "banner_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::Notification;
use crate::domain::models::Notifier;
use crate::domain::models::NotifierName;

/// In-terminal notifier. Alerts are forwarded to the UI loop, which draws
/// them as a banner above the conversation.
pub struct BannerNotifier {
    events: mpsc::UnboundedSender<Event>,
}

impl BannerNotifier {
    pub fn new(events: mpsc::UnboundedSender<Event>) -> BannerNotifier {
        return BannerNotifier { events };
    }
}

#[async_trait]
impl Notifier for BannerNotifier {
    fn name(&self) -> NotifierName {
        return NotifierName::Banner;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn notify(&self, notification: Notification) -> Result<()> {
        self.events.send(Event::Notify(notification))?;
        return Ok(());
    }
}
