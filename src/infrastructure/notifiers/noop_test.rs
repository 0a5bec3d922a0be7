use anyhow::Result;

use super::NoopNotifier;
use crate::domain::models::Notification;
use crate::domain::models::Notifier;
use crate::domain::models::NotifierName;
use crate::domain::models::Tier;

#[tokio::test]
async fn it_swallows_notifications() -> Result<()> {
    let notifier = NoopNotifier::default();

    assert_eq!(notifier.name(), NotifierName::None);
    notifier.health_check().await?;
    notifier
        .notify(Notification::for_tier(Tier::Regular))
        .await?;

    return Ok(());
}
