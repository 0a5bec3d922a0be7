#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

// One CTRL+U/CTRL+D jump, in rendered bubble lines.
const PAGE_LINES: u16 = 10;

/// Scroll position over the rendered transcript. Lengths are measured in
/// bubble lines, not messages; `AppState` keeps them in sync with the
/// bubble cache and the terminal size.
#[derive(Default)]
pub struct Scroll {
    transcript_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn up_page(&mut self) {
        for _ in 0..PAGE_LINES {
            self.up();
        }
    }

    pub fn down(&mut self) {
        // The bottom position keeps a full viewport of transcript on screen.
        let max_position = self.transcript_length.saturating_sub(self.viewport_length);

        self.position = self.position.saturating_add(1).min(max_position);
        self.scrollbar_state.next();
    }

    pub fn down_page(&mut self) {
        for _ in 0..PAGE_LINES {
            self.down();
        }
    }

    pub fn last(&mut self) {
        self.position = self.transcript_length.saturating_sub(self.viewport_length);
        self.scrollbar_state.last();
    }

    pub fn set_state(&mut self, transcript_length: u16, viewport_length: u16) {
        self.transcript_length = transcript_length;
        self.viewport_length = viewport_length;
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(transcript_length)
            .viewport_content_length(viewport_length);
    }
}
