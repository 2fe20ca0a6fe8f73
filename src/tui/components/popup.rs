//! # Popup Components
//!
//! Modal overlays drawn on top of a screen's list:
//! - `DetailPopup`: wrapped text for a participant, offer, article or product
//! - `ProductList`: selectable list of a company's products
//!
//! `ProductList` follows the persistent state + transient wrapper pattern:
//! the `ListState` lives in `TuiState`, the wrapper is built each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap,
};

use crate::api::{Product, or_untitled};
use crate::tui::component::Component;

pub struct DetailPopup<'a> {
    pub title: String,
    pub lines: Vec<Line<'a>>,
    pub percent_x: u16,
    pub percent_y: u16,
}

impl<'a> DetailPopup<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            lines,
            percent_x: 70,
            percent_y: 70,
        }
    }

    /// Smaller popup, for drawing over another popup.
    pub fn nested(mut self) -> Self {
        self.percent_x = 60;
        self.percent_y = 55;
        self
    }
}

impl Component for DetailPopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(self.percent_x, self.percent_y, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(std::mem::take(&mut self.lines))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay);
    }
}

pub struct ProductList<'a> {
    pub products: &'a [Product],
    pub loading: bool,
    pub state: &'a mut ListState,
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(75, 75, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Products ")
            .title_bottom(Line::from(" Enter Details  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.loading || self.products.is_empty() {
            let message = if self.loading {
                "Loading products..."
            } else {
                "No products listed."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .products
            .iter()
            .map(|p| ListItem::new(or_untitled(&p.name)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
        frame.render_stateful_widget(list, overlay, self.state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
