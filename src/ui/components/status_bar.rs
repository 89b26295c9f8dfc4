//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::Page;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hint for a page
    pub fn shortcuts(page: Page) -> &'static str {
        match page {
            Page::Dashboard => "1-3/Tab: pages • r: reload • G: log • ?: help • q: quit",
            Page::Employees => "a: add • d: delete • j/k: select • r: reload • ?: help • q: quit",
            Page::Attendance => "m: mark • f: filter • c: clear filter • r: reload • ?: help • q: quit",
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, page: Page, loading: bool, pending_requests: usize) {
        let (status_text, status_color) = if loading {
            (format!("Loading {}...", page.title().to_lowercase()), Color::Yellow)
        } else if pending_requests > 0 {
            (format!("🔄 Saving changes ({})...", pending_requests), Color::Yellow)
        } else {
            (Self::shortcuts(page).to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
