#[cfg(test)]
#[path = "noop_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Notification;
use crate::domain::models::Notifier;
use crate::domain::models::NotifierName;

#[derive(Default)]
pub struct NoopNotifier {}

#[async_trait]
impl Notifier for NoopNotifier {
    fn name(&self) -> NotifierName {
        return NotifierName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn notify(&self, _notification: Notification) -> Result<()> {
        return Ok(());
    }
}
