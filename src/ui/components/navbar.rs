//! Top navigation bar with the application title and page tabs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use crate::constants::APP_TITLE;
use crate::ui::core::Page;

pub struct Navbar;

impl Navbar {
    pub fn render(f: &mut Frame, area: Rect, current: Page) {
        let titles: Vec<Line> = Page::ALL
            .iter()
            .map(|page| Line::from(format!("{} {}", page.index() + 1, page.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", APP_TITLE))
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .select(current.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .divider("│");

        f.render_widget(tabs, area);
    }
}
