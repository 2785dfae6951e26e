//! Structured logging for the widget.
//!
//! The sink and the clock are installed once at startup; until then every
//! call is dropped. Level filtering happens here, before an entry is built,
//! so sinks only ever see entries that passed the configured minimum.

use derive_more::Display;
use serde::Deserialize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl LogLevel {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 | 1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Layer an entry comes from, printed as `DOM:`/`APP:`/`INF:`/`PRE:` plus a name
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// `key=value` pairs, e.g. the request url and HTTP status
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Log sink. Implementors only write; the helpers filter by level first.
pub trait Logger: Send + Sync {
    fn write(&self, entry: &LogEntry);

    fn emit(&self, level: LogLevel, component: LogComponent, message: &str, metadata: Option<&str>) {
        if !level_enabled(level) {
            return;
        }
        let entry = LogEntry::new(level, component, message);
        let entry = match metadata {
            Some(metadata) => entry.with_metadata(metadata),
            None => entry,
        };
        self.write(&entry);
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Debug, component, message, None);
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Info, component, message, None);
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Warn, component, message, None);
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Error, component, message, None);
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();
static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Install the sink. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the clock. Only the first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

/// Entries below `level` are dropped from now on.
pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn min_level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

pub fn level_enabled(level: LogLevel) -> bool {
    level >= min_level()
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|clock| clock.as_ref()).unwrap_or(&TickClock)
}

struct Silent;

impl Logger for Silent {
    fn write(&self, _entry: &LogEntry) {}
}

/// Stand-in clock before the browser one is installed: a plain counter
struct TickClock;

impl TimeProvider for TickClock {
    fn current_timestamp(&self) -> u64 {
        static TICKS: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

/// Debug-build-only log with `format!` arguments
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_for_filtering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(LogLevel::Warn as u8), LogLevel::Warn);
    }

    #[test]
    fn min_level_filters_below() {
        set_min_level(LogLevel::Warn);
        assert!(!level_enabled(LogLevel::Info));
        assert!(level_enabled(LogLevel::Error));
        set_min_level(LogLevel::Info);
        assert_eq!(min_level(), LogLevel::Info);
    }

    #[test]
    fn metadata_is_attached() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Infrastructure("CoinGecko"), "HTTP 429")
            .with_metadata("status=429");
        assert_eq!(entry.metadata.as_deref(), Some("status=429"));
        assert_eq!(entry.component.to_string(), "INF:CoinGecko");
    }
}
