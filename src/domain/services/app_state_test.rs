use std::time::Instant;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::AppState;
use crate::domain::models::Action;
use crate::domain::models::ActiveNotification;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Notification;
use crate::domain::models::Tier;
use crate::domain::models::TriageResponse;
use crate::domain::services::BubbleList;
use crate::domain::services::Responder;
use crate::domain::services::Scroll;

impl Default for AppState<'static> {
    fn default() -> AppState<'static> {
        return AppState {
            bubble_list: BubbleList::new(),
            messages: vec![],
            current_tier: None,
            notification: None,
            scroll: Scroll::default(),
            last_known_width: 100,
            last_known_height: 300,
            waiting_for_triage: false,
        };
    }
}

mod submit_message {
    use super::*;

    #[test]
    fn it_ignores_empty_submissions() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        let should_break = app_state.submit_message("   \n  ", &tx)?;

        assert!(!should_break);
        assert!(app_state.messages.is_empty());
        assert!(app_state.current_tier.is_none());
        assert!(!app_state.waiting_for_triage);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_sends_messages_for_triage() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        let should_break = app_state.submit_message("I feel anxious and scared", &tx)?;

        assert!(!should_break);
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].author, Author::User);
        assert_eq!(app_state.messages[0].text, "I feel anxious and scared");
        assert!(app_state.waiting_for_triage);

        let action = rx.blocking_recv().unwrap();
        match action {
            Action::TriageRequest(prompt) => {
                assert_eq!(prompt.text, "I feel anxious and scared");
            }
        }

        return Ok(());
    }

    #[test]
    fn it_breaks_on_quit() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        let should_break = app_state.submit_message("/q", &tx)?;

        assert!(should_break);
        assert!(app_state.messages.is_empty());
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_clears_the_conversation() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        app_state.add_message(Message::new(Author::User, "Hello"));
        app_state.current_tier = Some(Tier::Regular);
        app_state.handle_notification(Notification::for_tier(Tier::Regular));

        let should_break = app_state.submit_message("/clear", &tx)?;

        assert!(!should_break);
        assert!(app_state.messages.is_empty());
        assert!(app_state.current_tier.is_none());
        assert!(app_state.notification.is_none());

        return Ok(());
    }

    #[test]
    fn it_prints_help() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        let should_break = app_state.submit_message("/help", &tx)?;

        assert!(!should_break);
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].author, Author::Haven);
        assert!(app_state.messages[0].text.contains("COMMANDS:"));
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_rejects_unknown_slash_commands() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        let should_break = app_state.submit_message("/frobnicate", &tx)?;

        assert!(!should_break);
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].message_type(), MessageType::Error);
        assert!(!app_state.waiting_for_triage);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }
}

mod triage_flow {
    use super::*;

    #[test]
    fn it_handles_triage_responses() {
        let mut app_state = AppState::default();
        app_state.waiting_for_triage = true;

        app_state.handle_triage_response(TriageResponse {
            tier: Tier::Emergency,
            reply: Message::new(Author::Haven, Responder::respond(Tier::Emergency)),
        });

        assert_eq!(app_state.current_tier, Some(Tier::Emergency));
        assert_eq!(app_state.messages.len(), 1);
        assert_eq!(app_state.messages[0].author, Author::Haven);
        assert!(!app_state.waiting_for_triage);
    }

    #[test]
    fn it_tracks_only_the_latest_tier() {
        let mut app_state = AppState::default();

        for tier in [Tier::Emergency, Tier::Regular] {
            app_state.handle_triage_response(TriageResponse {
                tier,
                reply: Message::new(Author::Haven, Responder::respond(tier)),
            });
        }

        assert_eq!(app_state.current_tier, Some(Tier::Regular));
    }
}

mod notifications {
    use super::*;

    #[test]
    fn it_stores_the_active_notification() {
        let mut app_state = AppState::default();
        app_state.handle_notification(Notification::for_tier(Tier::Urgent));

        assert!(app_state.notification.is_some());
    }

    #[test]
    fn it_expires_timed_notifications_on_tick() {
        let mut app_state = AppState::default();
        let mut notification = Notification::for_tier(Tier::Regular);
        notification.duration_ms = Some(0);
        app_state.notification = Some(ActiveNotification::new(notification, Instant::now()));

        app_state.tick();

        assert!(app_state.notification.is_none());
    }

    #[test]
    fn it_dismisses_timed_notifications() {
        let mut app_state = AppState::default();
        app_state.handle_notification(Notification::for_tier(Tier::Regular));

        app_state.dismiss_notification();

        assert!(app_state.notification.is_none());
    }

    #[test]
    fn it_refuses_to_dismiss_emergency_notifications() -> Result<()> {
        let mut app_state = AppState::default();
        app_state.handle_notification(Notification::for_tier(Tier::Emergency));

        app_state.dismiss_notification();
        app_state.tick();

        match &app_state.notification {
            Some(active) => {
                assert!(!active.is_dismissible());
            }
            None => bail!("emergency notification should persist"),
        }

        return Ok(());
    }
}

mod layout {
    use ratatui::prelude::Rect;

    use super::*;

    #[test]
    fn it_syncs_on_rect_change() {
        let mut app_state = AppState::default();
        app_state.add_message(Message::new(Author::Haven, "Hi there!"));

        app_state.set_rect(Rect::new(0, 0, 50, 20));

        assert_eq!(app_state.last_known_width, 50);
        assert_eq!(app_state.last_known_height, 20);
        assert_eq!(app_state.bubble_list.len(), 3);
    }
}
