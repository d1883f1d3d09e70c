//! Reference data seed definitions from config.toml.
//!
//! The district → taluk → village hierarchy and the Sub-Registrar Offices are
//! declared in the configuration file and copied into the database on start.

use serde::Deserialize;

/// Reference data section of config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceConfig {
    /// Districts with their taluks and villages
    #[serde(default)]
    pub districts: Vec<DistrictConfig>,
    /// Sub-Registrar Offices, each naming its district
    #[serde(default)]
    pub sub_registrar_offices: Vec<SubRegistrarOfficeConfig>,
}

/// One district and its taluks
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictConfig {
    pub name: String,
    #[serde(default)]
    pub taluks: Vec<TalukConfig>,
}

/// One taluk and its villages
#[derive(Debug, Clone, Deserialize)]
pub struct TalukConfig {
    pub name: String,
    #[serde(default)]
    pub villages: Vec<String>,
}

/// One Sub-Registrar Office
#[derive(Debug, Clone, Deserialize)]
pub struct SubRegistrarOfficeConfig {
    pub name: String,
    /// Must match a `[[districts]]` name
    pub district: String,
}
