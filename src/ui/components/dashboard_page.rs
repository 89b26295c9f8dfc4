//! Dashboard: stat cards plus the most recent employees and attendance rows.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::api::DashboardStats;
use crate::constants::{EMPTY_RECENT_ATTENDANCE, EMPTY_RECENT_EMPLOYEES};
use crate::loader::DashboardData;
use crate::ui::components::banner::Banners;
use crate::ui::components::common::{empty_state, status_badge};
use crate::ui::components::load_state::LoadState;
use crate::ui::core::{Action, Component};
use crate::utils::datetime;

pub struct DashboardPage {
    pub data: DashboardData,
    pub load: LoadState,
    pub banners: Banners,
    date_format: String,
}

impl DashboardPage {
    pub fn new(date_format: &str) -> Self {
        Self {
            data: DashboardData::default(),
            load: LoadState::default(),
            banners: Banners::default(),
            date_format: date_format.to_string(),
        }
    }

    /// Reset page-local state when the page is entered
    pub fn mount(&mut self) {
        self.data = DashboardData::default();
        self.banners.clear_all();
    }

    /// Store a finished load; returns false for a superseded one
    pub fn apply_loaded(&mut self, seq: u64, data: DashboardData) -> bool {
        if !self.load.is_current(seq) {
            return false;
        }
        match &data.error {
            Some(error) => {
                self.banners.error.set(error.clone());
            }
            None => self.banners.error.clear(),
        }
        self.data = data;
        true
    }

    /// Stats to display; zeros when the stats request failed
    pub fn stats(&self) -> DashboardStats {
        self.data.stats.unwrap_or_default()
    }

    /// Rows of the "Recent Employees" table: id, name, email, department
    pub fn employee_rows(&self) -> Vec<Vec<String>> {
        self.data
            .recent_employees
            .iter()
            .map(|e| vec![e.employee_id.clone(), e.full_name.clone(), e.email.clone(), e.department.clone()])
            .collect()
    }

    /// Rows of the "Recent Attendance" table: name, date, status, department
    pub fn attendance_rows(&self) -> Vec<Vec<String>> {
        self.data
            .recent_attendance
            .iter()
            .map(|r| {
                vec![
                    r.full_name.clone(),
                    datetime::format_display(r.attendance_date, &self.date_format),
                    r.status.to_string(),
                    r.department.clone(),
                ]
            })
            .collect()
    }

    fn render_stat_card(f: &mut Frame, area: Rect, title: &str, value: u64, color: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .style(Style::default().fg(color));
        let value = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(value, area);
    }
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().copied()).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

impl Component for DashboardPage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(self.banners.height()),
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(5),
        ])
        .split(rect);

        self.banners.render(f, chunks[0]);

        let stats = self.stats();
        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(chunks[1]);
        Self::render_stat_card(f, cards[0], "Total Employees", stats.total_employees, Color::Blue);
        Self::render_stat_card(f, cards[1], "Present Today", stats.present_today, Color::Green);
        Self::render_stat_card(f, cards[2], "Total Records", stats.total_records, Color::Yellow);

        let employees_block = section_block(" Recent Employees ");
        let employee_rows = self.employee_rows();
        if employee_rows.is_empty() {
            f.render_widget(empty_state(EMPTY_RECENT_EMPLOYEES, None).block(employees_block), chunks[2]);
        } else {
            let table = Table::new(
                employee_rows.into_iter().map(Row::new),
                [
                    Constraint::Percentage(15),
                    Constraint::Percentage(30),
                    Constraint::Percentage(35),
                    Constraint::Percentage(20),
                ],
            )
            .header(header_row(&["Employee ID", "Name", "Email", "Department"]))
            .block(employees_block);
            f.render_widget(table, chunks[2]);
        }

        let attendance_block = section_block(" Recent Attendance ");
        if self.data.recent_attendance.is_empty() {
            f.render_widget(empty_state(EMPTY_RECENT_ATTENDANCE, None).block(attendance_block), chunks[3]);
        } else {
            let rows = self.data.recent_attendance.iter().map(|r| {
                Row::new(vec![
                    Cell::from(r.full_name.clone()),
                    Cell::from(datetime::format_display(r.attendance_date, &self.date_format)),
                    Cell::from(status_badge(r.status)),
                    Cell::from(r.department.clone()),
                ])
            });
            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(35),
                    Constraint::Percentage(20),
                    Constraint::Percentage(15),
                    Constraint::Percentage(30),
                ],
            )
            .header(header_row(&["Employee", "Date", "Status", "Department"]))
            .block(attendance_block);
            f.render_widget(table, chunks[3]);
        }
    }
}
