//! Stitchkit Settings Crate
//!
//! Handles application configuration: loading, validation, and persistence.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, PlanSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
