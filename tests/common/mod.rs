#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ems_lite::api::{
    Ack, ApiError, AttendanceRecord, AttendanceStatus, DashboardStats, EmsApi, Employee, Health, NewAttendance,
};
use ems_lite::config::Config;
use ems_lite::logger::Logger;
use ems_lite::ui::core::EventType;
use ems_lite::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// In-memory backend with switchable failures and a request log
#[derive(Default)]
pub struct FakeApi {
    pub employees: Mutex<Vec<Employee>>,
    pub attendance: Mutex<Vec<AttendanceRecord>>,
    pub stats: Mutex<DashboardStats>,
    pub fail_stats: AtomicBool,
    pub fail_employees: AtomicBool,
    pub fail_attendance: AtomicBool,
    /// Returned by the next mutations instead of applying them
    pub mutation_error: Mutex<Option<ApiError>>,
    /// When set, every list/stats fetch waits here before answering
    pub fetch_gate: Mutex<Option<Arc<Barrier>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(employees: Vec<Employee>, attendance: Vec<AttendanceRecord>) -> Self {
        let api = Self::default();
        *api.employees.lock().unwrap() = employees;
        *api.attendance.lock().unwrap() = attendance;
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|call| call.as_str() == name).count()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), ApiError> {
        if flag.load(Ordering::SeqCst) {
            Err(ApiError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    async fn pass_gate(&self) {
        let gate = self.fetch_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }
    }

    fn mutation_error(&self) -> Result<(), ApiError> {
        match self.mutation_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmsApi for FakeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.record("list_employees");
        self.pass_gate().await;
        self.check(&self.fail_employees)?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.record(format!("get_employee:{}", employee_id));
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                detail: Some("Employee not found".to_string()),
            })
    }

    async fn create_employee(&self, employee: &Employee) -> Result<Ack, ApiError> {
        self.record(format!("create_employee:{}", employee.employee_id));
        self.mutation_error()?;
        // newest first, like the backend's created_at ordering
        self.employees.lock().unwrap().insert(0, employee.clone());
        Ok(Ack {
            message: Some("Employee created successfully".to_string()),
        })
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_employee:{}", employee_id));
        self.mutation_error()?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.employee_id != employee_id);
        if employees.len() == before {
            return Err(ApiError::Status {
                status: 404,
                detail: Some("Employee not found".to_string()),
            });
        }
        Ok(())
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.record("list_attendance");
        self.pass_gate().await;
        self.check(&self.fail_attendance)?;
        Ok(self.attendance.lock().unwrap().clone())
    }

    async fn employee_attendance(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.record(format!("employee_attendance:{}", employee_id));
        Ok(self
            .attendance
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id && date.map_or(true, |d| r.attendance_date == d))
            .cloned()
            .collect())
    }

    async fn mark_attendance(&self, entry: &NewAttendance) -> Result<Ack, ApiError> {
        self.record(format!("mark_attendance:{}", entry.employee_id));
        self.mutation_error()?;
        let (full_name, department) = self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.employee_id == entry.employee_id)
            .map(|e| (e.full_name.clone(), e.department.clone()))
            .unwrap_or_default();
        self.attendance.lock().unwrap().insert(
            0,
            AttendanceRecord {
                employee_id: entry.employee_id.clone(),
                full_name,
                department,
                attendance_date: entry.attendance_date,
                status: entry.status,
            },
        );
        Ok(Ack {
            message: Some("Attendance marked successfully".to_string()),
        })
    }

    async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record("get_stats");
        self.pass_gate().await;
        self.check(&self.fail_stats)?;
        Ok(*self.stats.lock().unwrap())
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.record("health");
        Ok(Health {
            status: "ok".to_string(),
            db: Some("connected".to_string()),
        })
    }
}

pub fn employee(n: usize) -> Employee {
    Employee {
        employee_id: format!("EMP{:03}", n),
        full_name: format!("Employee {}", n),
        email: format!("employee{}@company.com", n),
        department: if n % 2 == 0 { "Engineering" } else { "Sales" }.to_string(),
    }
}

pub fn employees(count: usize) -> Vec<Employee> {
    (1..=count).map(employee).collect()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(employee_id: &str, attendance_date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: employee_id.to_string(),
        full_name: format!("Name of {}", employee_id),
        department: "Engineering".to_string(),
        attendance_date,
        status,
    }
}

/// `count` records on consecutive days, newest first
pub fn records(count: usize) -> Vec<AttendanceRecord> {
    (0..count)
        .map(|i| {
            let status = if i % 3 == 0 {
                AttendanceStatus::Absent
            } else {
                AttendanceStatus::Present
            };
            record("EMP001", date(2025, 1, 31 - i as u32), status)
        })
        .collect()
}

pub fn new_app(api: Arc<FakeApi>) -> AppComponent {
    AppComponent::new(api, &Config::default(), Logger::new())
}

/// Apply background actions until none arrives for a short while
pub async fn settle(app: &mut AppComponent) {
    while let Ok(true) = tokio::time::timeout(Duration::from_millis(10), app.process_next_background_action()).await {}
}

pub fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code));
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render the app into an in-memory terminal and return the screen as text
pub fn render_to_string(app: &mut AppComponent, width: u16, height: u16) -> String {
    use ems_lite::ui::core::Component;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
