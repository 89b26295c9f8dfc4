//! Utility modules for EMS Lite.
//!
//! - [`datetime`] - Attendance date parsing and formatting

pub mod datetime;
