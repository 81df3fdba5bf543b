//! Page-level configuration.
//!
//! Defaults match the storefront markup. A page can override any subset by
//! embedding JSON in `<script type="application/json" id="webstore-config">`.

use std::time::Duration;

use serde::Deserialize;

use crate::error::WebstoreError;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "webstore-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log_level: String,
    pub selectors: Selectors,
    pub suggest: SuggestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            selectors: Selectors::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

/// CSS selectors for the elements the script attaches to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub theme_control: String,
    pub search_input: String,
    pub suggestions: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_control: "[data-theme]".to_string(),
            search_input: "#search-input".to_string(),
            suggestions: "#search-suggestions".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestConfig {
    pub endpoint: String,
    pub min_query_chars: usize,
    pub debounce_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/search-suggestions".to_string(),
            min_query_chars: 3,
            debounce_ms: 300,
        }
    }
}

impl SuggestConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, WebstoreError> {
        serde_json::from_str(raw).map_err(|e| WebstoreError::Config(e.to_string()))
    }

    /// Read the inline config element. Defaults when the page has none.
    pub fn from_page(doc: &web_sys::Document) -> Result<Self, WebstoreError> {
        match doc.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(el) => Self::from_json(&el.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_contract() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.suggest.endpoint, "/api/search-suggestions");
        assert_eq!(config.suggest.min_query_chars, 3);
        assert_eq!(config.suggest.debounce(), Duration::from_millis(300));
        assert_eq!(config.selectors.theme_control, "[data-theme]");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = Config::from_json(r#"{"suggest": {"debounceMs": 150}, "logLevel": "debug"}"#)
            .expect("valid config");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.suggest.debounce_ms, 150);
        assert_eq!(config.suggest.min_query_chars, 3);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, WebstoreError::Config(_)), "got {:?}", err);
    }
}
