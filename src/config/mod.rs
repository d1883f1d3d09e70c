/// Application settings from config.toml
pub mod app;

/// Database connection and table creation
pub mod database;

/// Reference data (districts, taluks, villages, offices) seed definitions
pub mod reference;

pub use app::{AppConfig, DefaultsConfig, ServerConfig, load_app_configuration, load_config};
pub use reference::ReferenceConfig;
