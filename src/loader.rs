//! Page data loaders.
//!
//! Each loader issues the fixed set of requests a page needs concurrently,
//! waits for every outcome, and folds them into one view-state. A failed
//! resource leaves its slot at the default and contributes to a single
//! aggregate error; it never prevents the other slots from filling.

use std::fmt;

use crate::api::{ApiError, AttendanceRecord, DashboardStats, EmsApi, Employee};
use crate::constants::{ERROR_FETCH_DATA, ERROR_LOAD_DASHBOARD, RECENT_ATTENDANCE_LIMIT, RECENT_EMPLOYEES_LIMIT};

/// A resource fetched by a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Stats,
    Employees,
    Attendance,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Stats => "stats",
            Resource::Employees => "employees",
            Resource::Attendance => "attendance",
        };
        f.write_str(name)
    }
}

/// Combined outcome of the dashboard fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    /// `None` when the stats request failed
    pub stats: Option<DashboardStats>,
    /// First [`RECENT_EMPLOYEES_LIMIT`] employees in server order
    pub recent_employees: Vec<Employee>,
    /// First [`RECENT_ATTENDANCE_LIMIT`] attendance rows in server order
    pub recent_attendance: Vec<AttendanceRecord>,
    pub failed: Vec<Resource>,
    pub error: Option<String>,
}

/// Combined outcome of the attendance page fetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendancePageData {
    /// Employees offered by the "mark attendance" picker
    pub employees: Vec<Employee>,
    pub records: Vec<AttendanceRecord>,
    pub failed: Vec<Resource>,
    pub error: Option<String>,
}

/// Keep the value of a successful fetch, record a failed one
fn settle<T>(resource: Resource, outcome: Result<T, ApiError>, failed: &mut Vec<Resource>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Failed to fetch {}: {}", resource, e);
            failed.push(resource);
            None
        }
    }
}

fn aggregate_error(failed: &[Resource], message: &str) -> Option<String> {
    if failed.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Fetch stats, employees and attendance concurrently for the dashboard.
pub async fn load_dashboard(api: &dyn EmsApi) -> DashboardData {
    let (stats, employees, attendance) = tokio::join!(api.get_stats(), api.list_employees(), api.list_attendance());

    let mut failed = Vec::new();
    let stats = settle(Resource::Stats, stats, &mut failed);
    let recent_employees = settle(Resource::Employees, employees, &mut failed)
        .map(|mut list| {
            list.truncate(RECENT_EMPLOYEES_LIMIT);
            list
        })
        .unwrap_or_default();
    let recent_attendance = settle(Resource::Attendance, attendance, &mut failed)
        .map(|mut list| {
            list.truncate(RECENT_ATTENDANCE_LIMIT);
            list
        })
        .unwrap_or_default();

    let error = aggregate_error(&failed, ERROR_LOAD_DASHBOARD);
    log::debug!(
        "Dashboard loaded: stats={}, {} employees, {} attendance rows, {} failed",
        stats.is_some(),
        recent_employees.len(),
        recent_attendance.len(),
        failed.len()
    );

    DashboardData {
        stats,
        recent_employees,
        recent_attendance,
        failed,
        error,
    }
}

/// Fetch employees and attendance concurrently for the attendance page.
pub async fn load_attendance_page(api: &dyn EmsApi) -> AttendancePageData {
    let (employees, attendance) = tokio::join!(api.list_employees(), api.list_attendance());

    let mut failed = Vec::new();
    let employees = settle(Resource::Employees, employees, &mut failed).unwrap_or_default();
    let records = settle(Resource::Attendance, attendance, &mut failed).unwrap_or_default();
    let error = aggregate_error(&failed, ERROR_FETCH_DATA);

    AttendancePageData {
        employees,
        records,
        failed,
        error,
    }
}
