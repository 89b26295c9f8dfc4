//! Employees: full employee table with an inline "Add Employee" form and delete.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Row, Table, TableState},
    Frame,
};

use crate::api::Employee;
use crate::constants::{EMPTY_EMPLOYEES, EMPTY_EMPLOYEES_HINT};
use crate::ui::components::banner::Banners;
use crate::ui::components::common::empty_state;
use crate::ui::components::forms::{EmployeeForm, FormEvent};
use crate::ui::components::load_state::LoadState;
use crate::ui::core::{Action, BannerKind, Component, DialogType, Mutation, Page};

pub struct EmployeesPage {
    employees: Vec<Employee>,
    selected_index: usize,
    table_state: TableState,
    pub form: EmployeeForm,
    show_form: bool,
    pub load: LoadState,
    pub banners: Banners,
}

impl Default for EmployeesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesPage {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            form: EmployeeForm::new(),
            show_form: false,
            load: LoadState::default(),
            banners: Banners::default(),
        }
    }

    /// Reset page-local state when the page is entered
    pub fn mount(&mut self) {
        self.employees.clear();
        self.selected_index = 0;
        self.form.reset();
        self.show_form = false;
        self.banners.clear_all();
        self.update_table_state();
    }

    /// Store a finished load; returns false for a superseded one
    pub fn apply_loaded(&mut self, seq: u64, result: Result<Vec<Employee>, String>) -> bool {
        if !self.load.is_current(seq) {
            return false;
        }
        match result {
            Ok(employees) => {
                self.employees = employees;
                self.banners.error.clear();
            }
            Err(message) => {
                self.banners.error.set(message);
            }
        }
        self.update_table_state();
        true
    }

    /// Local effects of a mutation the backend accepted
    pub fn on_mutation_succeeded(&mut self, mutation: &Mutation) {
        if let Mutation::CreateEmployee(_) = mutation {
            self.form.reset();
            self.show_form = false;
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn selected(&self) -> Option<&Employee> {
        self.employees.get(self.selected_index)
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// Table rows: id, name, email, department
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.employees
            .iter()
            .map(|e| vec![e.employee_id.clone(), e.full_name.clone(), e.email.clone(), e.department.clone()])
            .collect()
    }

    fn update_table_state(&mut self) {
        if self.employees.is_empty() {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= self.employees.len() {
                self.selected_index = self.employees.len() - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => match self.form.to_employee() {
                Ok(employee) => Action::Submit(Mutation::CreateEmployee(employee)),
                Err(message) => Action::ShowBanner {
                    page: Page::Employees,
                    kind: BannerKind::Error,
                    text: message.to_string(),
                },
            },
            FormEvent::Cancel => {
                self.show_form = false;
                Action::None
            }
            FormEvent::Edited | FormEvent::Ignored => Action::None,
        }
    }
}

impl Component for EmployeesPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.show_form {
            return self.handle_form_key(key);
        }

        match key.code {
            KeyCode::Char('a') => {
                self.toggle_form();
                Action::None
            }
            KeyCode::Char('j') | KeyCode::Down => Action::NextRow,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousRow,
            KeyCode::Char('d') | KeyCode::Delete => match self.selected() {
                Some(employee) => Action::ShowDialog(DialogType::ConfirmDeleteEmployee {
                    employee_id: employee.employee_id.clone(),
                    full_name: employee.full_name.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                if !self.employees.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.employees.len() - 1);
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
        self.show_form
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let form_height = if self.show_form { 9 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(self.banners.height()),
            Constraint::Length(form_height),
            Constraint::Min(3),
        ])
        .split(rect);

        self.banners.render(f, chunks[0]);

        if self.show_form {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Add Employee ")
                .style(Style::default().fg(Color::Green));
            let inner = block.inner(chunks[1]);
            f.render_widget(block, chunks[1]);
            self.form.render(f, inner);
        }

        let title = format!(" Employees List ({}) ", self.employees.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        if self.employees.is_empty() {
            f.render_widget(empty_state(EMPTY_EMPLOYEES, Some(EMPTY_EMPLOYEES_HINT)).block(block), chunks[2]);
            return;
        }

        let table = Table::new(
            self.rows().into_iter().map(Row::new),
            [
                Constraint::Percentage(15),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
            ],
        )
        .header(
            Row::new(["Employee ID", "Full Name", "Email", "Department"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .block(block);

        f.render_stateful_widget(table, chunks[2], &mut self.table_state);
    }
}
