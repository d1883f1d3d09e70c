//! Application configuration loading from config.toml.
//!
//! The file holds the HTTP bind address, attribution defaults offered to new
//! forms, and the reference data used to seed the lookup tables.

use crate::config::reference::ReferenceConfig;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Attribution defaults for new documents
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Reference data to seed
    #[serde(flatten)]
    pub reference: ReferenceConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

/// `[defaults]` section, served to the browser to prefill new forms
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DefaultsConfig {
    #[serde(default)]
    pub typist_name: String,
    #[serde(default)]
    pub typist_office: String,
    #[serde(default)]
    pub sro_office: String,
}

/// Loads the configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or a Sub-Registrar Office names a district that is not declared.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    for office in &config.reference.sub_registrar_offices {
        if !config
            .reference
            .districts
            .iter()
            .any(|district| district.name == office.district)
        {
            return Err(Error::Config {
                message: format!(
                    "Sub-Registrar Office '{}' names unknown district '{}'",
                    office.name, office.district
                ),
            });
        }
    }

    Ok(config)
}

/// Loads the configuration from `DEED_DRAFTER_CONFIG`, or ./config.toml.
///
/// A missing file at the default location is not an error: the service runs
/// with default settings and empty reference data.
pub fn load_app_configuration() -> Result<AppConfig> {
    let explicit = std::env::var("DEED_DRAFTER_CONFIG").ok();
    let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    if explicit.is_none() && !Path::new(path).exists() {
        tracing::warn!("No {DEFAULT_CONFIG_PATH} found, using defaults");
        return Ok(AppConfig::default());
    }

    let mut config = load_config(path)?;
    if let Ok(bind_address) = std::env::var("BIND_ADDRESS") {
        config.server.bind_address = bind_address;
    }
    Ok(config)
}
