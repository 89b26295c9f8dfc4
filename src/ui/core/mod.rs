//! Core UI functionality for EMS Lite.
//!
//! This module contains the building blocks the pages are made of.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input polling
//! - [`task_manager`] - Background loads, mutations, and timers
//!
//! Components turn key presses into [`Action`]s. Background tasks report back
//! by sending actions over the task manager channel, which the app drains on
//! every tick, so all view-state is only ever touched by the UI task.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, BannerKind, DialogType, Mutation, Page, PageData};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
