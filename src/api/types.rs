//! Wire types exchanged with the EMS backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An employee as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Attendance status for one employee on one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A joined attendance row (employee name and department are denormalized).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `POST /api/attendance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee_id: String,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Aggregate counters served by `GET /api/stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub present_today: u64,
    pub total_records: u64,
}

/// Liveness payload served by `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub db: Option<String>,
}

/// Acknowledgement of a mutation.
///
/// The backend answers with `{"message": "..."}` or echoes the created
/// entity; only the message is of interest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
