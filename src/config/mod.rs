//! Application configuration

mod app_config;

pub use app_config::{AppConfig, LeaderboardConfig, LogFormat, LoggingConfig, ServerConfig};
