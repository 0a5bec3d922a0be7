#[cfg(test)]
#[path = "banner_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::ActiveNotification;
use crate::domain::models::Severity;

/// Alert banner pinned above the conversation while a notification is
/// active.
pub struct Banner {}

impl Banner {
    pub fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Error => return Color::Red,
            Severity::Warning => return Color::Yellow,
            Severity::Info => return Color::Blue,
        }
    }

    pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, active: &ActiveNotification) {
        let color = Banner::severity_color(active.notification.severity);

        let lines = vec![
            Line::from(Span::styled(
                active.notification.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(active.notification.description.clone()),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Left),
            rect,
        );
    }
}
