//! Attendance: all attendance records, a local date filter, and the
//! "Mark Attendance" form.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::{AttendanceRecord, Employee};
use crate::constants::{EMPTY_ATTENDANCE, EMPTY_ATTENDANCE_HINT, ERROR_INVALID_DATE};
use crate::loader::AttendancePageData;
use crate::ui::components::banner::Banners;
use crate::ui::components::common::{create_input_paragraph, empty_state, status_badge};
use crate::ui::components::forms::{AttendanceForm, FormEvent};
use crate::ui::components::load_state::LoadState;
use crate::ui::core::{Action, BannerKind, Component, Mutation, Page};
use crate::utils::datetime;

pub struct AttendancePage {
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
    selected_index: usize,
    table_state: TableState,
    pub form: AttendanceForm,
    show_form: bool,
    filter: Option<NaiveDate>,
    /// Text being typed into the filter, while the filter input is open
    filter_input: Option<String>,
    pub load: LoadState,
    pub banners: Banners,
    date_format: String,
}

impl AttendancePage {
    pub fn new(date_format: &str) -> Self {
        Self {
            employees: Vec::new(),
            records: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            form: AttendanceForm::new(),
            show_form: false,
            filter: None,
            filter_input: None,
            load: LoadState::default(),
            banners: Banners::default(),
            date_format: date_format.to_string(),
        }
    }

    /// Reset page-local state when the page is entered
    pub fn mount(&mut self) {
        self.employees.clear();
        self.records.clear();
        self.selected_index = 0;
        self.form.reset();
        self.show_form = false;
        self.filter = None;
        self.filter_input = None;
        self.banners.clear_all();
        self.update_table_state();
    }

    /// Store a finished load; returns false for a superseded one
    pub fn apply_loaded(&mut self, seq: u64, data: AttendancePageData) -> bool {
        if !self.load.is_current(seq) {
            return false;
        }
        match data.error {
            Some(error) => {
                self.banners.error.set(error);
            }
            None => self.banners.error.clear(),
        }
        self.employees = data.employees;
        self.records = data.records;
        self.update_table_state();
        true
    }

    /// Local effects of a mutation the backend accepted
    pub fn on_mutation_succeeded(&mut self, mutation: &Mutation) {
        if let Mutation::MarkAttendance(_) = mutation {
            self.form.reset();
            self.show_form = false;
        }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filter(&self) -> Option<NaiveDate> {
        self.filter
    }

    /// Set or clear the date filter; the fetched records are left untouched
    pub fn set_filter(&mut self, date: Option<NaiveDate>) {
        self.filter = date;
        self.selected_index = 0;
        self.update_table_state();
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// Records matching the filter, in server order
    pub fn visible_records(&self) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|record| self.filter.map_or(true, |date| record.attendance_date == date))
            .collect()
    }

    /// Table rows: id, name, department, date, status
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.visible_records()
            .into_iter()
            .map(|r| {
                vec![
                    r.employee_id.clone(),
                    r.full_name.clone(),
                    r.department.clone(),
                    datetime::format_display(r.attendance_date, &self.date_format),
                    r.status.to_string(),
                ]
            })
            .collect()
    }

    fn update_table_state(&mut self) {
        let visible = self.visible_records().len();
        if visible == 0 {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= visible {
                self.selected_index = visible - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match self.form.handle_key(key, &self.employees) {
            FormEvent::Submit => match self.form.to_entry() {
                Ok(entry) => Action::Submit(Mutation::MarkAttendance(entry)),
                Err(message) => error_banner(message),
            },
            FormEvent::Cancel => {
                self.show_form = false;
                Action::None
            }
            FormEvent::Edited | FormEvent::Ignored => Action::None,
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Action {
        let Some(input) = self.filter_input.as_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => {
                self.filter_input = None;
                Action::None
            }
            KeyCode::Enter => {
                let text = input.trim().to_string();
                if text.is_empty() {
                    self.filter_input = None;
                    self.set_filter(None);
                    return Action::None;
                }
                match datetime::parse_date(&text) {
                    Ok(date) => {
                        self.filter_input = None;
                        self.set_filter(Some(date));
                        Action::None
                    }
                    Err(_) => error_banner(ERROR_INVALID_DATE),
                }
            }
            KeyCode::Backspace => {
                input.pop();
                Action::None
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_filter_line(&self, f: &mut Frame, area: Rect) {
        if let Some(input) = &self.filter_input {
            f.render_widget(create_input_paragraph(input, "Filter by Date (YYYY-MM-DD)", true), area);
            return;
        }

        let text = match self.filter {
            Some(date) => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    datetime::format_ymd(date),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (f: change • c: clear filter)", Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::styled("Filter: none  (f: filter by date)", Style::default().fg(Color::DarkGray)),
        };
        f.render_widget(Paragraph::new(text), area);
    }
}

fn error_banner(message: &str) -> Action {
    Action::ShowBanner {
        page: Page::Attendance,
        kind: BannerKind::Error,
        text: message.to_string(),
    }
}

impl Component for AttendancePage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.filter_input.is_some() {
            return self.handle_filter_key(key);
        }
        if self.show_form {
            return self.handle_form_key(key);
        }

        match key.code {
            KeyCode::Char('m') => {
                self.toggle_form();
                Action::None
            }
            KeyCode::Char('f') => {
                self.filter_input = Some(self.filter.map(datetime::format_ymd).unwrap_or_default());
                Action::None
            }
            KeyCode::Char('c') => {
                self.set_filter(None);
                Action::None
            }
            KeyCode::Char('j') | KeyCode::Down => Action::NextRow,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousRow,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                let visible = self.visible_records().len();
                if visible > 0 {
                    self.selected_index = (self.selected_index + 1).min(visible - 1);
                    self.update_table_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.update_table_state();
                Action::None
            }
            _ => action,
        }
    }

    fn captures_input(&self) -> bool {
        self.show_form || self.filter_input.is_some()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let form_height = if self.show_form { 6 } else { 0 };
        let filter_height = if self.filter_input.is_some() { 3 } else { 1 };
        let chunks = Layout::vertical([
            Constraint::Length(self.banners.height()),
            Constraint::Length(form_height),
            Constraint::Length(filter_height),
            Constraint::Min(3),
        ])
        .split(rect);

        self.banners.render(f, chunks[0]);

        if self.show_form {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Mark Attendance ")
                .style(Style::default().fg(Color::Green));
            let inner = block.inner(chunks[1]);
            f.render_widget(block, chunks[1]);
            self.form.render(f, inner, &self.employees);
        }

        self.render_filter_line(f, chunks[2]);

        let visible = self.visible_records();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Attendance Records ({}) ", visible.len()))
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        if visible.is_empty() {
            f.render_widget(empty_state(EMPTY_ATTENDANCE, Some(EMPTY_ATTENDANCE_HINT)).block(block), chunks[3]);
            return;
        }

        let rows: Vec<Row> = visible
            .iter()
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.employee_id.clone()),
                    Cell::from(r.full_name.clone()),
                    Cell::from(r.department.clone()),
                    Cell::from(datetime::format_display(r.attendance_date, &self.date_format)),
                    Cell::from(status_badge(r.status)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(15),
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
            ],
        )
        .header(
            Row::new(["Employee ID", "Employee Name", "Department", "Date", "Status"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ")
        .block(block);

        f.render_stateful_widget(table, chunks[3], &mut self.table_state);
    }
}
