//! Runtime configuration for the service.
//!
//! Everything the aggregation core consumes — the box list, the phenomenon
//! title, the freshness window, the per-fetch timeout — is an explicit,
//! injected value rather than a module-level constant, so tests can run the
//! whole pipeline against fakes with deterministic settings.
//!
//! Resolution order: built-in defaults, then the TOML file named by the
//! `HIVEBOX_CONFIG` env var (if set), then `HOST`/`PORT` env overrides for
//! the bind address.

use serde::Deserialize;

use crate::stations;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Base URL of the openSenseMap box API; the per-box URL appends the id.
pub const DEFAULT_BASE_URL: &str = "https://api.opensensemap.org/boxes";

/// Sensor title the aggregation extracts. The monitored boxes are
/// German-labelled, hence "Temperatur" rather than "Temperature".
pub const DEFAULT_PHENOMENON: &str = "Temperatur";

/// Maximum age (seconds) a measurement may have to count as fresh.
pub const DEFAULT_FRESHNESS_WINDOW_SECS: u64 = 3600;

/// Per-box fetch timeout (seconds). A hung box must never hold up the
/// other fetches for longer than this.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// openSenseMap API base URL (overridable so tests can point the
    /// aggregator at a local fake).
    pub base_url: String,
    /// Ids of the boxes polled on each aggregation cycle.
    pub box_ids: Vec<String>,
    /// Sensor title to extract from each box.
    pub phenomenon: String,
    /// Freshness window in seconds.
    pub freshness_window_secs: u64,
    /// Per-box fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Server bind address (default: `0.0.0.0`).
    pub host: String,
    /// Server bind port (default: `3000`).
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            box_ids: stations::all_box_ids()
                .iter()
                .map(|id| id.to_string())
                .collect(),
            phenomenon: DEFAULT_PHENOMENON.to_string(),
            freshness_window_secs: DEFAULT_FRESHNESS_WINDOW_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// TOML view of [`Config`]. Every field is optional so a file can override
/// just the parts it cares about.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    box_ids: Option<Vec<String>>,
    phenomenon: Option<String>,
    freshness_window_secs: Option<u64>,
    fetch_timeout_secs: Option<u64>,
    host: Option<String>,
    port: Option<u16>,
}

impl Config {
    /// Resolve configuration from defaults, the optional `HIVEBOX_CONFIG`
    /// TOML file, and the `HOST`/`PORT` env vars.
    ///
    /// Panics on an unreadable or invalid config file — misconfiguration
    /// should fail fast at startup, not surface as odd behavior later.
    pub fn load() -> Self {
        let mut config = match std::env::var("HIVEBOX_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Cannot read config file '{}': {}", path, e));
                Self::from_toml_str(&raw)
                    .unwrap_or_else(|e| panic!("Invalid config file '{}': {}", path, e))
            }
            Err(_) => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Parse a TOML document, filling unset fields from the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(box_ids) = file.box_ids {
            config.box_ids = box_ids;
        }
        if let Some(phenomenon) = file.phenomenon {
            config.phenomenon = phenomenon;
        }
        if let Some(window) = file.freshness_window_secs {
            config.freshness_window_secs = window;
        }
        if let Some(timeout) = file.fetch_timeout_secs {
            config.fetch_timeout_secs = timeout;
        }
        if let Some(host) = file.host {
            config.host = host;
        }
        if let Some(port) = file.port {
            config.port = port;
        }
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.port = port.parse().expect("PORT must be a valid u16");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
