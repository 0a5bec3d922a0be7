use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Banner;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        use tui_textarea::Input;
        use tui_textarea::Key;

        let test_str = "I feel anxious about tomorrow and could really use someone to talk to.";
        for char in test_str.chars() {
            textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let mut constraints = vec![Constraint::Min(1), Constraint::Max(4)];
            if app_state.notification.is_some() {
                constraints.insert(0, Constraint::Max(4));
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.size());

            let mut chat_rect = layout[0];
            let input_rect = *layout.last().unwrap();

            if let Some(active) = &app_state.notification {
                Banner::render(frame, layout[0], active);
                chat_rect = layout[1];
            }

            if chat_rect.width != app_state.last_known_width
                || chat_rect.height != app_state.last_known_height
            {
                app_state.set_rect(chat_rect);
            }

            app_state
                .bubble_list
                .render(frame, chat_rect, app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                chat_rect.inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.waiting_for_triage {
                loading.render(frame, input_rect);
            } else {
                frame.render_widget(textarea.widget(), input_rect);
            }
        })?;

        match events.next().await? {
            Event::Notify(notification) => {
                app_state.handle_notification(notification);
            }
            Event::TriageResponse(res) => {
                app_state.handle_triage_response(res);
            }
            Event::UITick() => {
                app_state.tick();
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEsc() => {
                app_state.dismiss_notification();
            }
            Event::KeyboardEnter() => {
                if app_state.waiting_for_triage {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                textarea = TextArea::default();
                if app_state.submit_message(&input_str, &tx)? {
                    break;
                }
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.waiting_for_triage {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !app_state.waiting_for_triage {
                    textarea.insert_str(&text);
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIResize() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new();

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
