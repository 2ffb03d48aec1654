//! Configuration and settings management for Stitchkit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is
//! `<config dir>/stitchkit/config.toml`.
//!
//! Configuration is organized into logical sections:
//! - Plan settings (maximum stitch distance)
//! - Export defaults (format, design name, author)
//! - The default thread attached to every design

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stitchkit_core::DEFAULT_MAX_STITCH_DISTANCE;
use stitchkit_export::{ExportOptions, Metadata, Thread};
use tracing::{debug, info};

/// Stitch planning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// Maximum single-instruction travel in tenths of a millimeter
    pub max_stitch_distance: f64,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            max_stitch_distance: DEFAULT_MAX_STITCH_DISTANCE,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Encoder format used when none is requested
    pub format: String,
    /// Design name written into pattern metadata
    pub design_name: String,
    /// Author written into pattern metadata
    pub author: String,
    /// Output file name without extension
    pub file_stem: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let metadata = Metadata::default();
        Self {
            format: "json".to_string(),
            design_name: metadata.name,
            author: metadata.author,
            file_stem: "embroidery".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub plan: PlanSettings,
    pub export: ExportSettings,
    /// Thread attached to every exported pattern
    pub thread: Thread,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("stitchkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("platform config directory not found".to_string())
            })
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// With no explicit path and no default file, returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            Ok(default) => {
                debug!("No config at {}, using defaults", default.display());
                Ok(Self::default())
            }
            Err(e) => {
                debug!("{}, using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.plan.max_stitch_distance;
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "plan.max_stitch_distance".to_string(),
                value: max.to_string(),
            });
        }

        if self.export.format.trim().is_empty() {
            return Err(ConfigError::Empty("export.format".to_string()));
        }

        if self.export.file_stem.trim().is_empty() {
            return Err(ConfigError::Empty("export.file_stem".to_string()));
        }

        Ok(())
    }

    /// Per-request export options derived from this config
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: self.export.format.clone(),
            max_stitch_distance: self.plan.max_stitch_distance,
            metadata: Metadata {
                name: self.export.design_name.clone(),
                author: self.export.author.clone(),
            },
            thread: self.thread.clone(),
            file_stem: self.export.file_stem.clone(),
        }
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
