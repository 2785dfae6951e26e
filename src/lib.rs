use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

#[macro_use]
pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Runs when the module loads: panic hook, config and logging.
///
/// Mounting and fetching start separately, from `startWidget`.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let loaded = infrastructure::ui::read_widget_config();
    let config = config::install_config(loaded.clone().unwrap_or_default());

    domain::logging::set_min_level(config.log_level);
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    if let Err(error) = loaded {
        get_logger().warn(
            LogComponent::Presentation("Initialize"),
            &format!("Ignoring widget config, using defaults: {}", error),
        );
    }

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Dólar Hoje initialized (refresh every {} ms)", config.refresh_interval_ms),
    );
}
