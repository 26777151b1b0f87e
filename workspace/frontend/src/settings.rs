use flight_common::format::DEFAULT_CURRENCY;
use flight_common::{ChartPreference, Preferences};
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "flightcast_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host. `None` sends requests to the page origin.
    pub api_host: Option<String>,

    /// Backend API port, only used together with `api_host`
    pub api_port: u16,

    /// API path prefix (e.g., "/api"), empty when the backend serves the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Period of the background refresh on data pages
    pub refresh_interval_ms: u32,

    /// Delay between successive history rows appearing
    pub row_stagger_ms: u32,

    /// ISO code prices are formatted in
    pub currency: String,

    /// Chart style of the history chart
    pub chart_kind: ChartPreference,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: None,
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            refresh_interval_ms: 30_000,
            row_stagger_ms: 100,
            currency: DEFAULT_CURRENCY.to_string(),
            chart_kind: ChartPreference::Line,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten());
        }

        settings
    }

    /// Applies stored overrides; `lookup` receives keys without the storage prefix.
    /// Values that don't parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = lookup("api_host") {
            self.api_host = Some(api_host).filter(|h| !h.trim().is_empty());
        }
        if let Some(port) = lookup("api_port").and_then(|p| p.parse().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = lookup("api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = lookup("api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = lookup("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }
        if let Some(interval) = lookup("refresh_interval_ms").and_then(|v| v.parse().ok()) {
            self.refresh_interval_ms = interval;
        }
        if let Some(stagger) = lookup("row_stagger_ms").and_then(|v| v.parse().ok()) {
            self.row_stagger_ms = stagger;
        }
        if let Some(currency) = lookup("currency").filter(|c| !c.trim().is_empty()) {
            self.currency = currency.trim().to_uppercase();
        }
        if let Some(kind) = lookup("chart_kind") {
            self.chart_kind = match kind.to_lowercase().as_str() {
                "bar" => ChartPreference::Bar,
                _ => ChartPreference::Line,
            };
        }
    }

    /// Takes the formatting choices from the backend's user preferences.
    pub fn apply_preferences(&mut self, preferences: &Preferences) {
        if !preferences.currency.trim().is_empty() {
            self.currency = preferences.currency.trim().to_uppercase();
        }
        self.chart_kind = preferences.chart_type;
    }

    /// Get the base API URL. Empty host means same-origin, relative URLs.
    pub fn api_base_url(&self) -> String {
        match &self.api_host {
            Some(host) => {
                let protocol = if self.api_use_https { "https" } else { "http" };
                format!("{}://{}:{}{}", protocol, host, self.api_port, self.api_path)
            }
            None => self.api_path.clone(),
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> AppSettings {
        let stored: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| stored.get(key).cloned());
        settings
    }

    #[test]
    fn test_default_is_same_origin() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "");
        assert_eq!(settings.api_url("/history"), "/history");
        assert_eq!(settings.refresh_interval_ms, 30_000);
        assert_eq!(settings.row_stagger_ms, 100);
    }

    #[test]
    fn test_remote_backend() {
        let settings = overrides(&[("api_host", "api.example.com"), ("api_port", "8443"), ("api_use_https", "TRUE")]);
        assert_eq!(settings.api_url("/analytics"), "https://api.example.com:8443/analytics");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let settings = overrides(&[("api_port", "http"), ("log_level", "loud"), ("refresh_interval_ms", "-1")]);
        let defaults = AppSettings::default();
        assert_eq!(settings.api_port, defaults.api_port);
        assert_eq!(settings.log_level, defaults.log_level);
        assert_eq!(settings.refresh_interval_ms, defaults.refresh_interval_ms);
    }

    #[test]
    fn test_currency_and_chart_kind() {
        let settings = overrides(&[("currency", " usd "), ("chart_kind", "Bar")]);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.chart_kind, ChartPreference::Bar);
    }

    #[test]
    fn test_apply_preferences() {
        let mut settings = AppSettings::default();
        settings.apply_preferences(&Preferences {
            currency: "eur".to_string(),
            chart_type: ChartPreference::Bar,
            ..Preferences::default()
        });
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.chart_kind, ChartPreference::Bar);
    }
}
