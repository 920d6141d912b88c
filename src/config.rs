use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP port to listen on.
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug").
    pub log_level: String,

    /// Version string reported by /system/version.
    pub server_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_level: "info".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file, or fall back to the defaults
    /// when the file does not exist. The catalog holds no external state,
    /// so running without a config file is fine.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(Path::new(path)) {
            Ok(raw) => serde_json::from_str::<AppConfig>(&raw).expect("Invalid config.json"),
            Err(_) => AppConfig::default(),
        }
    }
}
