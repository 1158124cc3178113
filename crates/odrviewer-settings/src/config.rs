//! Panel configuration
//!
//! Startup defaults for the settings registry plus named camera presets.
//! Stored as JSON or TOML, chosen by file extension, in the platform config
//! directory (`~/.config/odrviewer/panel.toml` on Linux).

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::params::ViewerParams;
use odrviewer_scene::{CameraPose, NamedPose};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR_NAME: &str = "odrviewer";
const CONFIG_FILE_NAME: &str = "panel.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Registry values the panel starts with
    pub defaults: ViewerParams,
    /// Extra camera positions offered next to the S110 S2 preset
    pub camera_presets: Vec<NamedPose>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            defaults: ViewerParams::default(),
            camera_presets: vec![NamedPose {
                name: "S110 S2".to_string(),
                pose: CameraPose::s110_s2(),
            }],
        }
    }
}

impl PanelConfig {
    /// Default location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: PanelConfig = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded panel config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No panel config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let fov = self.defaults.fov;
        if !fov.is_finite() || fov <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "defaults.fov".to_string(),
                value: fov.to_string(),
            }
            .into());
        }

        let mut names = HashSet::new();
        for preset in &self.camera_presets {
            if !names.insert(preset.name.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.name.clone()).into());
            }
            preset.pose.validate()?;
        }

        Ok(())
    }

    pub fn preset(&self, name: &str) -> Option<&NamedPose> {
        self.camera_presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Resolution, ViewMode};
    use tempfile::TempDir;

    fn custom() -> PanelConfig {
        let mut config = PanelConfig::default();
        config.defaults.resolution = Resolution::Medium;
        config.defaults.view_mode = ViewMode::Outlines;
        config.defaults.fov = 60.0;
        config.camera_presets.push(NamedPose {
            name: "Overview".to_string(),
            pose: CameraPose::from_json(
                r#"{"pos":{"x":0,"y":-500,"z":800},"target":{"x":0,"y":0,"z":0},"fov":60}"#,
            )
            .unwrap(),
        });
        config
    }

    #[test]
    fn test_toml_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("panel.toml");

        custom().save_to_file(&path).unwrap();
        let loaded = PanelConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.defaults.resolution, Resolution::Medium);
        assert_eq!(loaded.defaults.view_mode, ViewMode::Outlines);
        assert_eq!(loaded.camera_presets.len(), 2);
        assert!(loaded.preset("overview").is_some());
    }

    #[test]
    fn test_json_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("panel.json");

        custom().save_to_file(&path).unwrap();
        let loaded = PanelConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.defaults.fov, 60.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("panel.toml");
        std::fs::write(&path, "[defaults]\nwireframe = true\n").unwrap();

        let loaded = PanelConfig::load_from_file(&path).unwrap();

        assert!(loaded.defaults.wireframe);
        assert!(loaded.defaults.roadmarks);
        assert_eq!(loaded.defaults.fov, 75.0);
        assert!(loaded.preset("S110 S2").is_some());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = PanelConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, PanelConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let err = PanelConfig::default()
            .save_to_file(&dir.path().join("panel.yaml"))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_fov_and_duplicates() {
        let mut config = PanelConfig::default();
        config.defaults.fov = 0.0;
        assert!(config.validate().is_err());

        let mut config = PanelConfig::default();
        let first = config.camera_presets[0].clone();
        config.camera_presets.push(first);
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::DuplicatePreset(_)))
        ));
    }
}
