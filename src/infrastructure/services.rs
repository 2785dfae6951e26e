//! Browser-backed implementations of the domain logging abstractions.

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Writes entries to the browser console, one console method per level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn format_log_entry(entry: &LogEntry, timestamp: &str) -> String {
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message),
        }
    }
}

impl Logger for ConsoleLogger {
    fn write(&self, entry: &LogEntry) {
        let timestamp = crate::domain::logging::get_time_provider().format_timestamp(entry.timestamp);
        let formatted = Self::format_log_entry(entry, &timestamp);

        match entry.level {
            LogLevel::Debug => gloo::console::debug!(formatted),
            LogLevel::Info => gloo::console::info!(formatted),
            LogLevel::Warn => gloo::console::warn!(formatted),
            LogLevel::Error => gloo::console::error!(formatted),
        }
    }
}

/// Wall clock from `Date.now()`, printed as local `HH:MM:SS.mmm`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}
