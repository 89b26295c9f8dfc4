use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this many buffered lines
const MAX_ENTRIES: usize = 2000;

/// Target used for UI activity messages routed through the `log` facade
pub const ACTIVITY_TARGET: &str = "ems_lite::activity";

/// Shared logger that can be used across the application
///
/// Entries are kept in memory for the activity log dialog. Once [`Logger::install`]
/// has run, every `log` record of the process (and every [`Logger::log`] call)
/// flows through a `fern` dispatch into this buffer and, when enabled, a file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    installed: Arc<AtomicBool>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            installed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Install this logger as the process-wide `log` backend
    pub fn install(&self, config: &LoggingConfig) -> Result<()> {
        let sink = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .level(log::LevelFilter::Warn)
            .level_for("ems_lite", log::LevelFilter::Debug)
            .chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        if record.target() == ACTIVITY_TARGET {
                            out.finish(format_args!("{}", message))
                        } else {
                            out.finish(format_args!("{} {}: {}", record.level(), record.target(), message))
                        }
                    })
                    .chain(fern::Output::call(move |record| sink.push(record.args().to_string()))),
            );

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {:<5} {}: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        dispatch.apply().context("Failed to install logger")?;
        self.installed.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.installed.load(Ordering::SeqCst) {
            log::info!(target: ACTIVITY_TARGET, "{}", message);
        } else {
            self.push(message);
        }
    }

    fn push(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_ENTRIES {
                let overflow = logs.len() - MAX_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join("ems-lite").join("ems-lite.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
