//! Reusable UI components

pub mod banner;
pub mod common;
pub mod forms;
pub mod load_state;
pub mod navbar;
pub mod status_bar;

// Pages and overlays
pub mod attendance_page;
pub mod dashboard_page;
pub mod dialog_component;
pub mod employees_page;

// Component exports
pub use attendance_page::AttendancePage;
pub use banner::{BannerSlot, Banners};
pub use dashboard_page::DashboardPage;
pub use dialog_component::DialogComponent;
pub use employees_page::EmployeesPage;
pub use forms::{AttendanceField, AttendanceForm, EmployeeField, EmployeeForm, FormEvent};
pub use load_state::LoadState;
pub use navbar::Navbar;
pub use status_bar::StatusBar;
