//! Widget configuration.
//!
//! Every field has a default, so the page works without any configuration.
//! A host page may override fields with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="widget-config">
//!   { "refresh_interval_ms": 60000, "log_level": "debug" }
//! </script>
//! ```

use crate::domain::logging::LogLevel;
use crate::domain::market_data::{AssetId, FiatCurrency, HistoryWindow};
use once_cell::sync::OnceCell;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "widget-config";

static ACTIVE_CONFIG: OnceCell<WidgetConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub api_base_url: String,
    pub asset: AssetId,
    pub currency: FiatCurrency,
    pub history_days: HistoryWindow,
    pub refresh_interval_ms: u32,
    pub canvas_id: String,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_level: LogLevel,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.coingecko.com/api/v3".to_string(),
            asset: AssetId::default(),
            currency: FiatCurrency::default(),
            history_days: HistoryWindow::default(),
            refresh_interval_ms: 120_000,
            canvas_id: "priceChart".to_string(),
            chart_width: 800,
            chart_height: 400,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config Parse Error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid Config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".to_string()));
        }
        if self.asset.value().is_empty() {
            return Err(ConfigError::Invalid("asset is empty".to_string()));
        }
        if self.history_days.days() == 0 {
            return Err(ConfigError::Invalid("history_days must be at least 1".to_string()));
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Invalid("refresh_interval_ms must be positive".to_string()));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(ConfigError::Invalid("chart size must be positive".to_string()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Install the config read at startup. Later calls are ignored.
pub fn install_config(config: WidgetConfig) -> &'static WidgetConfig {
    ACTIVE_CONFIG.get_or_init(|| config)
}

/// The installed config, or defaults if startup never installed one
pub fn active_config() -> &'static WidgetConfig {
    ACTIVE_CONFIG.get_or_init(WidgetConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = WidgetConfig::from_json(r#"{"refresh_interval_ms": 60000, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.asset.value(), "tether");
        assert_eq!(config.history_days.days(), 7);
    }

    #[test]
    fn rejects_zero_interval_and_bad_json() {
        assert!(matches!(
            WidgetConfig::from_json(r#"{"refresh_interval_ms": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(WidgetConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = WidgetConfig { api_base_url: "http://localhost:8080/".into(), ..Default::default() };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
