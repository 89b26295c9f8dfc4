//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend
/// Base URL used when neither the environment nor the config file sets one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Environment variable selecting the backend base URL
pub const API_URL_ENV: &str = "EMS_API_URL";

// Summary truncation on the dashboard
pub const RECENT_EMPLOYEES_LIMIT: usize = 5;
pub const RECENT_ATTENDANCE_LIMIT: usize = 10;

// Banner durations (seconds)
pub const SUCCESS_BANNER_SECS: u64 = 3;
pub const ERROR_BANNER_SECS: u64 = 5;
pub const BANNER_MIN_SECS: u64 = 1;
pub const BANNER_MAX_SECS: u64 = 60;

// Success Messages
pub const SUCCESS_EMPLOYEE_ADDED: &str = "✅ Employee added successfully!";
pub const SUCCESS_EMPLOYEE_DELETED: &str = "✅ Employee deleted successfully!";
pub const SUCCESS_ATTENDANCE_MARKED: &str = "✅ Attendance marked successfully!";

// Error Messages
pub const ERROR_ADD_EMPLOYEE: &str = "❌ Failed to add employee";
pub const ERROR_DELETE_EMPLOYEE: &str = "❌ Failed to delete employee";
pub const ERROR_MARK_ATTENDANCE: &str = "❌ Failed to mark attendance";
pub const ERROR_FETCH_EMPLOYEES: &str = "❌ Failed to fetch employees";
pub const ERROR_FETCH_DATA: &str = "❌ Failed to fetch data";
pub const ERROR_LOAD_DASHBOARD: &str = "❌ Failed to load dashboard data";
pub const ERROR_REQUIRED_FIELDS: &str = "❌ Please fill in all required fields";
pub const ERROR_INVALID_DATE: &str = "❌ Date must be in YYYY-MM-DD format";
pub const ERROR_INVALID_EMAIL: &str = "❌ Please enter a valid email address";

// Empty states
pub const EMPTY_EMPLOYEES: &str = "No employees found";
pub const EMPTY_EMPLOYEES_HINT: &str = "Press 'a' to add an employee";
pub const EMPTY_ATTENDANCE: &str = "No attendance records found";
pub const EMPTY_ATTENDANCE_HINT: &str = "Press 'm' to mark attendance";
pub const EMPTY_RECENT_EMPLOYEES: &str = "No employees added yet";
pub const EMPTY_RECENT_ATTENDANCE: &str = "No attendance records yet";

// UI Messages
pub const APP_TITLE: &str = "EMS Lite";
pub const DIALOG_TITLE_ACTIVITY_LOG: &str = "🔍 Activity Log - Press 'Esc', 'G' or 'q' to close";
pub const CONFIRM_DELETE_EMPLOYEE: &str = "Are you sure you want to delete this employee?";
