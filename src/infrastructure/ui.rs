//! Direct DOM access for the parts of the page Leptos does not own.

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, WidgetConfig};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::page::QuoteDisplay;

/// `<title>` and `<meta name="description">` of the host document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHead;

impl DocumentHead {
    pub fn new() -> Self {
        Self
    }

    pub fn set_title(&self, title: &str) {
        gloo::utils::document().set_title(title);
    }

    pub fn set_meta_description(&self, content: &str) {
        let meta = gloo::utils::document()
            .query_selector(r#"meta[name="description"]"#)
            .ok()
            .flatten();
        match meta {
            Some(element) => {
                if element.set_attribute("content", content).is_err() {
                    get_logger().warn(
                        LogComponent::Infrastructure("UI"),
                        "Failed to set meta description content",
                    );
                }
            }
            None => get_logger().warn(
                LogComponent::Infrastructure("UI"),
                "meta[name=\"description\"] not found in document head",
            ),
        }
    }

    pub fn apply(&self, display: &QuoteDisplay) {
        self.set_title(&display.title);
        self.set_meta_description(&display.meta_description);
    }
}

/// Reads the optional inline JSON config block; absent means defaults.
pub fn read_widget_config() -> Result<WidgetConfig, ConfigError> {
    match gloo::utils::document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => WidgetConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(WidgetConfig::default()),
    }
}
