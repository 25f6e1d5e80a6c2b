//! Application configuration
//!
//! Loaded from `config/default`, `config/local` and `APP__*` environment
//! variables, in that order of precedence.

mod app_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, StorageSettings};
