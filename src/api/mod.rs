//! Client side of the EMS REST API.
//!
//! [`EmsApi`] is the interface the UI and the loaders talk to; [`RestClient`]
//! implements it over HTTP. Every operation is a single request: no retries,
//! no authentication, no caching.

use async_trait::async_trait;
use chrono::NaiveDate;

pub mod client;
pub mod types;

pub use client::RestClient;
pub use types::{Ack, AttendanceRecord, AttendanceStatus, DashboardStats, Employee, Health, NewAttendance};

/// Failure of a single API operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Server-provided detail message, if the response carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message for the user: the server detail when present, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self.detail() {
            Some(detail) => format!("❌ {}", detail),
            None => fallback.to_string(),
        }
    }
}

/// Extract the `detail` field from an error body.
///
/// FastAPI-style backends send either `{"detail": "text"}` or, for
/// validation errors, `{"detail": [{"msg": "...", ...}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|msg| msg.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Operations offered by the EMS backend.
#[async_trait]
pub trait EmsApi: Send + Sync {
    // Employees
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;
    async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError>;
    async fn create_employee(&self, employee: &Employee) -> Result<Ack, ApiError>;
    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError>;

    // Attendance
    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn employee_attendance(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;
    async fn mark_attendance(&self, entry: &NewAttendance) -> Result<Ack, ApiError>;

    // Stats and liveness
    async fn get_stats(&self) -> Result<DashboardStats, ApiError>;
    async fn health(&self) -> Result<Health, ApiError>;
}
