//! Application Configuration
//!
//! Read once at start-up from an optional `window.__DQ_CONFIG__` object.
//! Every field has a default, so a partial object is valid.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Characters left untouched by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_STATE_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/geohacker/india/master/state/india_state.geojson";
pub const DEFAULT_DISTRICT_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/geohacker/india/master/district/india_district.geojson";

/// Initial map view and animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub fly_duration_secs: f64,
    pub fit_padding_px: f64,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: [22.5937, 78.9629],
            zoom: 5.0,
            min_zoom: 4.0,
            max_zoom: 8.0,
            fly_duration_secs: 1.5,
            fit_padding_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub state_geojson_url: String,
    pub district_geojson_url: String,
    pub map: MapViewConfig,
    /// Delay before the task list is reloaded after a status toggle
    pub reconcile_delay_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            state_geojson_url: DEFAULT_STATE_GEOJSON_URL.to_string(),
            district_geojson_url: DEFAULT_DISTRICT_GEOJSON_URL.to_string(),
            map: MapViewConfig::default(),
            reconcile_delay_ms: crate::reconcile::RECONCILE_DELAY_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Configured level, `Info` when the string is not a level name
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

/// URL builder for the analytics API
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn summary(&self) -> String {
        format!("{}/api/dashboard/summary", self.base)
    }

    pub fn regions(&self) -> String {
        format!("{}/api/dashboard/states", self.base)
    }

    pub fn region_detail(&self, region: &str) -> String {
        format!("{}/api/dashboard/state?state={}", self.base, encode_component(region))
    }

    pub fn tasks(&self) -> String {
        format!("{}/todo/api/tasks", self.base)
    }

    pub fn task(&self, id: &str) -> String {
        format!("{}/todo/api/tasks/{}", self.base, encode_component(id))
    }
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.map.center, [22.5937, 78.9629]);
        assert_eq!(config.map.zoom, 5.0);
        assert_eq!(config.reconcile_delay_ms, 500);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: AppConfig = serde_json::from_value(json!({
            "api_base": "https://dq.example.org/",
            "map": { "zoom": 6 },
            "log_level": "debug"
        })).unwrap();
        assert_eq!(config.map.zoom, 6.0);
        assert_eq!(config.map.max_zoom, 8.0);
        assert_eq!(config.state_geojson_url, DEFAULT_STATE_GEOJSON_URL);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.endpoints().summary(), "https://dq.example.org/api/dashboard/summary");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig { log_level: "chatty".into(), ..Default::default() };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_endpoints_encode_components() {
        let api = Endpoints::new("");
        assert_eq!(api.regions(), "/api/dashboard/states");
        assert_eq!(
            api.region_detail("Jammu & Kashmir"),
            "/api/dashboard/state?state=Jammu%20%26%20Kashmir"
        );
        assert_eq!(api.tasks(), "/todo/api/tasks");
        assert_eq!(api.task("42"), "/todo/api/tasks/42");
        assert_eq!(api.task("a/b"), "/todo/api/tasks/a%2Fb");
    }
}
