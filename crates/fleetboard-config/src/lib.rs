//! Configuration for the Fleetboard dashboard.
//!
//! TOML file at the XDG config path, `FLEETBOARD_`-prefixed environment
//! overrides, and translation to `fleetboard_core::InventoryConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetboard_core::{InventoryConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Address the dashboard listens on.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Environment shown when none is given in the URL.
    #[serde(default = "default_environment")]
    pub default_environment: String,

    /// Emit only same-origin asset references (no CDN links).
    #[serde(default)]
    pub offline_mode: bool,

    /// Hours without a report before a node counts as unreported.
    #[serde(default = "default_unreported_hours")]
    pub unreported_hours: u64,

    /// Upstream inventory service connection.
    #[serde(default)]
    pub inventory: InventorySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            default_environment: default_environment(),
            offline_mode: false,
            unreported_hours: default_unreported_hours(),
            inventory: InventorySettings::default(),
        }
    }
}

/// The `[inventory]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InventorySettings {
    /// Service base URL (e.g., "http://localhost:8080").
    #[serde(default = "default_inventory_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Skip TLS verification (self-signed deployments).
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            url: default_inventory_url(),
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1:5000".into()
}
fn default_environment() -> String {
    "production".into()
}
fn default_unreported_hours() -> u64 {
    2
}
fn default_inventory_url() -> String {
    "http://localhost:8080".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "fleetboard", "fleetboard").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fleetboard");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load settings from file + environment, from an explicit path.
pub fn load_settings_from(path: &std::path::Path) -> Result<Settings, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FLEETBOARD_").split("__"));

    let settings: Settings = figment.extract()?;
    Ok(settings)
}

/// Load settings from the canonical path + environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&config_path())
}

/// Load settings, returning defaults if the file doesn't exist.
pub fn load_settings_or_default() -> Settings {
    load_settings().unwrap_or_default()
}

// ── Translation to runtime config ───────────────────────────────────

impl Settings {
    /// Build the core connection config from these settings.
    pub fn inventory_config(&self) -> Result<InventoryConfig, ConfigError> {
        let url: url::Url = self
            .inventory
            .url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "inventory.url".into(),
                reason: format!("invalid URL: {}", self.inventory.url),
            })?;

        let tls = if self.inventory.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.inventory.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(InventoryConfig {
            url,
            tls,
            timeout: Duration::from_secs(self.inventory.timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert_eq!(s.default_environment, "production");
        assert_eq!(s.unreported_hours, 2);
        assert!(!s.offline_mode);
        assert!(s.inventory_config().is_ok());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                offline_mode = true
                default_environment = "staging"

                [inventory]
                url = "https://inventory.internal:8081"
                insecure = true
                "#,
            )?;

            let s = load_settings_from(std::path::Path::new("config.toml"))
                .expect("settings load");
            assert!(s.offline_mode);
            assert_eq!(s.default_environment, "staging");

            let inv = s.inventory_config().expect("inventory config");
            assert_eq!(inv.url.as_str(), "https://inventory.internal:8081/");
            assert_eq!(inv.tls, TlsVerification::DangerAcceptInvalid);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "offline_mode = false")?;
            jail.set_env("FLEETBOARD_OFFLINE_MODE", "true");
            jail.set_env("FLEETBOARD_INVENTORY__URL", "http://example:9090");

            let s = load_settings_from(std::path::Path::new("config.toml"))
                .expect("settings load");
            assert!(s.offline_mode);
            assert_eq!(s.inventory.url, "http://example:9090");
            Ok(())
        });
    }

    #[test]
    fn bad_url_is_a_validation_error() {
        let mut s = Settings::default();
        s.inventory.url = "not a url".into();
        assert!(matches!(
            s.inventory_config(),
            Err(ConfigError::Validation { .. })
        ));
    }
}
