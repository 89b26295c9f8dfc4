//! EMS Lite - a terminal client for a small employee management service
//!
//! This library provides the HTTP client for the EMS Lite backend, the
//! dashboard aggregation loader, and a Ratatui interface with Dashboard,
//! Employees and Attendance pages.
//!
//! # Modules
//!
//! * [`api`] - REST client and data structures of the backend
//! * [`config`] - Application configuration management
//! * [`loader`] - Concurrent page loaders with partial failure reporting
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// REST client and data models of the EMS Lite backend
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Page loaders that fan out independent requests
pub mod loader;

/// Logging utilities backing the activity log
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
