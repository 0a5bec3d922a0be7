#[cfg(test)]
#[path = "triage_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::Classifier;
use super::Responder;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::Notification;
use crate::domain::models::NotifierBox;
use crate::domain::models::TriageResponse;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /clear (/c) - Clear the conversation and start over.
- /quit (/q, /exit) - Close the chat.
- /help (/h) - Print this help menu.

HOTKEYS:
- Up/Down arrow - Scroll through the conversation.
- CTRL+U/CTRL+D - Scroll a page at a time.
- Esc - Dismiss the current alert banner.
- CTRL+C - Close the chat.

ALERTS:
Every message you send is read for signs of how urgent your situation
is. Emergency messages connect you with a crisis counselor right away
and raise a red banner that stays up. Urgent messages raise a yellow
banner while a counselor is found for you. Everything else gets a
session scheduled with a counselor.
"#
    .trim();

    return text.to_string();
}

pub struct TriageService {}

impl TriageService {
    /// Worker loop owning the notifier. Each request is classified,
    /// announced through the notifier, then answered back on the event
    /// channel.
    pub async fn start(
        notifier: NotifierBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        notifier.health_check().await?;

        // A closed channel means the UI is gone; shut down with it.
        while let Some(action) = rx.recv().await {
            match action {
                Action::TriageRequest(prompt) => {
                    let tier = Classifier::classify(&prompt.text);
                    tracing::debug!(tier = %tier, "classified message");

                    if let Err(err) = notifier.notify(Notification::for_tier(tier)).await {
                        tracing::warn!(error = %err, "notifier failed to deliver");
                    }

                    tx.send(Event::TriageResponse(TriageResponse {
                        tier,
                        reply: Message::new(Author::Haven, Responder::respond(tier)),
                    }))?;
                }
            }
        }

        return Ok(());
    }
}
