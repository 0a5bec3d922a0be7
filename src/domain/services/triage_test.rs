use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::TriageService;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Notification;
use crate::domain::models::NotifierName;
use crate::domain::models::Severity;
use crate::domain::models::Tier;
use crate::domain::models::TriagePrompt;
use crate::domain::models::TriageResponse;
use crate::infrastructure::notifiers::NotifierManager;

async fn submit(text: &str) -> Result<(Notification, TriageResponse)> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let notifier = NotifierManager::get(NotifierName::Banner, event_tx.clone())?;
    let worker = tokio::spawn(async move {
        let _ = TriageService::start(notifier, event_tx, &mut action_rx).await;
    });

    action_tx.send(Action::TriageRequest(TriagePrompt::new(text.to_string())))?;

    let notification = match event_rx.recv().await {
        Some(Event::Notify(notification)) => notification,
        _ => bail!("expected the notification first"),
    };

    let response = match event_rx.recv().await {
        Some(Event::TriageResponse(response)) => response,
        _ => bail!("expected a triage response"),
    };

    worker.abort();
    return Ok((notification, response));
}

#[tokio::test]
async fn it_shuts_down_when_the_action_channel_closes() -> Result<()> {
    let (event_tx, _event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let notifier = NotifierManager::get(NotifierName::None, event_tx.clone())?;

    drop(action_tx);
    TriageService::start(notifier, event_tx, &mut action_rx).await?;

    return Ok(());
}

#[tokio::test]
async fn it_escalates_emergencies() -> Result<()> {
    let (notification, response) = submit("I want to die").await?;

    assert_eq!(response.tier, Tier::Emergency);
    assert_eq!(response.reply.author, Author::Haven);
    assert_eq!(
        response.reply.text,
        "We're connecting you with a crisis counselor immediately. Please stay with us."
    );
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.duration_ms, None);

    return Ok(());
}

#[tokio::test]
async fn it_prioritizes_urgent_messages() -> Result<()> {
    let (notification, response) = submit("I feel anxious and scared").await?;

    assert_eq!(response.tier, Tier::Urgent);
    assert_eq!(notification.severity, Severity::Warning);
    assert_eq!(notification.duration_ms, Some(5000));

    return Ok(());
}

#[tokio::test]
async fn it_schedules_regular_messages() -> Result<()> {
    let (notification, response) = submit("How do I book an appointment?").await?;

    assert_eq!(response.tier, Tier::Regular);
    assert_eq!(
        response.reply.text,
        "Thank you for reaching out. We'll schedule a session with a counselor."
    );
    assert_eq!(notification.severity, Severity::Info);
    assert_eq!(notification.duration_ms, Some(5000));

    return Ok(());
}
