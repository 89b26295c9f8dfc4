//! Inline create forms.
//!
//! Every field write goes through a field enum, so the set of editable keys
//! is closed and checked by the compiler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::api::{AttendanceStatus, Employee, NewAttendance};
use crate::constants::{ERROR_INVALID_DATE, ERROR_INVALID_EMAIL, ERROR_REQUIRED_FIELDS};
use crate::ui::components::common::{
    create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::utils::datetime;

/// What a key press did to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Edited,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeField {
    #[default]
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID *",
            EmployeeField::FullName => "Full Name *",
            EmployeeField::Email => "Email *",
            EmployeeField::Department => "Department *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "e.g., EMP001",
            EmployeeField::FullName => "e.g., John Doe",
            EmployeeField::Email => "e.g., john@company.com",
            EmployeeField::Department => "e.g., Engineering",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|field| field == self).unwrap_or(0)
    }
}

/// Buffer of the "Add Employee" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    employee_id: String,
    full_name: String,
    email: String,
    department: String,
    focus: EmployeeField,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    fn value_mut(&mut self, field: EmployeeField) -> &mut String {
        match field {
            EmployeeField::EmployeeId => &mut self.employee_id,
            EmployeeField::FullName => &mut self.full_name,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Department => &mut self.department,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focus(&self) -> EmployeeField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % EmployeeField::ALL.len();
        self.focus = EmployeeField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = EmployeeField::ALL.len();
        self.focus = EmployeeField::ALL[(self.focus.position() + len - 1) % len];
    }

    pub fn is_empty(&self) -> bool {
        EmployeeField::ALL.iter().all(|field| self.value(*field).is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the input constraints and build the request body
    pub fn to_employee(&self) -> Result<Employee, &'static str> {
        if EmployeeField::ALL.iter().any(|field| self.value(*field).trim().is_empty()) {
            return Err(ERROR_REQUIRED_FIELDS);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ERROR_INVALID_EMAIL);
        }
        Ok(Employee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormEvent::Edited
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                FormEvent::Edited
            }
            KeyCode::Backspace => {
                self.value_mut(self.focus).pop();
                FormEvent::Edited
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value_mut(self.focus).push(c);
                FormEvent::Edited
            }
            _ => FormEvent::Ignored,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3), Constraint::Length(1)]).split(area);
        let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[0]);
        let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);
        let cells = [top[0], top[1], bottom[0], bottom[1]];

        for (field, cell) in EmployeeField::ALL.iter().zip(cells) {
            let value = self.value(*field);
            let focused = self.focus == *field;
            let shown = if value.is_empty() && !focused { field.placeholder() } else { value };
            f.render_widget(create_input_paragraph(shown, field.label(), focused), cell);
        }

        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, rows[2]);
    }
}

/// Same shape check an `<input type="email">` applies
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceField {
    #[default]
    EmployeeId,
    AttendanceDate,
    Status,
}

impl AttendanceField {
    pub const ALL: [AttendanceField; 3] = [
        AttendanceField::EmployeeId,
        AttendanceField::AttendanceDate,
        AttendanceField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceField::EmployeeId => "Employee * (←/→)",
            AttendanceField::AttendanceDate => "Date *",
            AttendanceField::Status => "Status * (←/→)",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|field| field == self).unwrap_or(0)
    }
}

/// Buffer of the "Mark Attendance" form
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceForm {
    employee_id: String,
    attendance_date: String,
    status: AttendanceStatus,
    focus: AttendanceField,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            attendance_date: datetime::format_today(),
            status: AttendanceStatus::Present,
            focus: AttendanceField::EmployeeId,
        }
    }
}

impl AttendanceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn attendance_date(&self) -> &str {
        &self.attendance_date
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    pub fn focus(&self) -> AttendanceField {
        self.focus
    }

    /// Write a field from its text form; an unknown status leaves the field unchanged
    pub fn set(&mut self, field: AttendanceField, value: &str) {
        match field {
            AttendanceField::EmployeeId => self.employee_id = value.to_string(),
            AttendanceField::AttendanceDate => self.attendance_date = value.to_string(),
            AttendanceField::Status => match value {
                "Present" => self.status = AttendanceStatus::Present,
                "Absent" => self.status = AttendanceStatus::Absent,
                _ => {}
            },
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % AttendanceField::ALL.len();
        self.focus = AttendanceField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = AttendanceField::ALL.len();
        self.focus = AttendanceField::ALL[(self.focus.position() + len - 1) % len];
    }

    /// Move the employee picker through `employees`; "no selection" sits before the first entry
    pub fn cycle_employee(&mut self, employees: &[Employee], forward: bool) {
        if employees.is_empty() {
            self.employee_id.clear();
            return;
        }
        let current = employees.iter().position(|e| e.employee_id == self.employee_id);
        let len = employees.len();
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(len - 1),
            (Some(i), true) if i + 1 < len => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.employee_id = next.map(|i| employees[i].employee_id.clone()).unwrap_or_default();
    }

    /// Apply the input constraints and build the request body
    pub fn to_entry(&self) -> Result<NewAttendance, &'static str> {
        if self.employee_id.trim().is_empty() || self.attendance_date.trim().is_empty() {
            return Err(ERROR_REQUIRED_FIELDS);
        }
        let attendance_date = datetime::parse_date(&self.attendance_date).map_err(|_| ERROR_INVALID_DATE)?;
        Ok(NewAttendance {
            employee_id: self.employee_id.trim().to_string(),
            attendance_date,
            status: self.status,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent, employees: &[Employee]) -> FormEvent {
        match key.code {
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormEvent::Edited
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                FormEvent::Edited
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match self.focus {
                    AttendanceField::EmployeeId => self.cycle_employee(employees, forward),
                    AttendanceField::Status => self.status = self.status.toggled(),
                    AttendanceField::AttendanceDate => return FormEvent::Ignored,
                }
                FormEvent::Edited
            }
            KeyCode::Char(' ') if self.focus == AttendanceField::Status => {
                self.status = self.status.toggled();
                FormEvent::Edited
            }
            KeyCode::Backspace if self.focus == AttendanceField::AttendanceDate => {
                self.attendance_date.pop();
                FormEvent::Edited
            }
            KeyCode::Char(c) if self.focus == AttendanceField::AttendanceDate && (c.is_ascii_digit() || c == '-') => {
                self.attendance_date.push(c);
                FormEvent::Edited
            }
            _ => FormEvent::Ignored,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, employees: &[Employee]) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(area);
        let cells = Layout::horizontal([
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

        let employee_label = employees
            .iter()
            .find(|e| e.employee_id == self.employee_id)
            .map(|e| format!("{} - {}", e.employee_id, e.full_name))
            .unwrap_or_else(|| "Select Employee".to_string());

        f.render_widget(
            create_selection_paragraph(
                employee_label,
                AttendanceField::EmployeeId.label(),
                self.focus == AttendanceField::EmployeeId,
            ),
            cells[0],
        );
        f.render_widget(
            create_input_paragraph(
                &self.attendance_date,
                AttendanceField::AttendanceDate.label(),
                self.focus == AttendanceField::AttendanceDate,
            ),
            cells[1],
        );
        f.render_widget(
            create_selection_paragraph(
                self.status.to_string(),
                AttendanceField::Status.label(),
                self.focus == AttendanceField::Status,
            ),
            cells[2],
        );

        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, rows[1]);
    }
}
