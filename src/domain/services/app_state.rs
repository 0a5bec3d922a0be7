#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Instant;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::triage;
use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::ActiveNotification;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Notification;
use crate::domain::models::SlashCommand;
use crate::domain::models::Tier;
use crate::domain::models::TriagePrompt;
use crate::domain::models::TriageResponse;

/// All conversation state for one chat session. Owned by the UI loop and
/// never persisted; it dies with the process.
pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub messages: Vec<Message>,
    pub current_tier: Option<Tier>,
    pub notification: Option<ActiveNotification>,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
    pub waiting_for_triage: bool,
}

impl<'a> AppState<'a> {
    pub fn new() -> AppState<'a> {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(),
            messages: vec![],
            current_tier: None,
            notification: None,
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            waiting_for_triage: false,
        };

        app_state.messages.push(Message::new(
            Author::Haven,
            "Hi, you've reached Haven. This space is just for you. What's going on?",
        ));

        return app_state;
    }

    /// Sequences a single submission. Empty input is rejected outright with
    /// no state change. Returns true when the chat should close.
    pub fn submit_message(
        &mut self,
        text: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }

        if let Some(command) = SlashCommand::parse(text) {
            if command.is_quit() {
                return Ok(true);
            }

            if command.is_clear() {
                self.clear();
                return Ok(false);
            }

            if command.is_help() {
                self.add_message(Message::new(Author::Haven, &triage::help_text()));
                return Ok(false);
            }
        } else if text.trim().starts_with('/') {
            // Command typos should not end up triaged as conversation.
            self.add_message(Message::new_with_type(
                Author::Haven,
                MessageType::Error,
                "I don't know that command. Run /help to see what's available.",
            ));
            return Ok(false);
        }

        self.add_message(Message::new(Author::User, text));
        self.waiting_for_triage = true;
        tx.send(Action::TriageRequest(TriagePrompt::new(text.to_string())))?;

        return Ok(false);
    }

    pub fn handle_triage_response(&mut self, res: TriageResponse) {
        self.current_tier = Some(res.tier);
        self.add_message(res.reply);
        self.waiting_for_triage = false;
    }

    pub fn handle_notification(&mut self, notification: Notification) {
        self.notification = Some(ActiveNotification::new(notification, Instant::now()));
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(active) = &self.notification {
            if active.is_dismissible() {
                self.notification = None;
            }
        }
    }

    pub fn tick(&mut self) {
        if let Some(active) = &self.notification {
            if active.is_expired(Instant::now()) {
                self.notification = None;
            }
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn clear(&mut self) {
        self.messages.clear();
        self.current_tier = None;
        self.notification = None;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width as usize);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_triage {
            self.scroll.last();
        }
    }
}
