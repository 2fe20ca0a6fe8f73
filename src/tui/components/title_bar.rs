//! # TitleBar Component
//!
//! Single-line bar showing the active screen and the latest status message.
//! Purely presentational: all data arrives as props.
//!
//! 1. **Loading**: `"Expo Guide | Offers | ⠹ Loading..."`
//! 2. **Status message**: `"Expo Guide | Offers | View: A-Z"`
//! 3. **Default**: `"Expo Guide | Offers"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
    /// Spinner frame while the active screen loads its list.
    pub loading_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String, loading_frame: Option<usize>) -> Self {
        Self {
            screen_title,
            status_message,
            loading_frame,
        }
    }

    fn text(&self) -> String {
        if let Some(frame) = self.loading_frame {
            format!(
                "Expo Guide | {} | {} Loading...",
                self.screen_title,
                SPINNER[frame % SPINNER.len()]
            )
        } else if self.status_message.is_empty() {
            format!("Expo Guide | {}", self.screen_title)
        } else {
            format!("Expo Guide | {} | {}", self.screen_title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
