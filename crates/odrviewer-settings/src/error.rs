//! Error types for the settings crate.
//!
//! Change handlers never fail. These errors come from the string-driven
//! panel surface (unknown keys, malformed values) and from the panel
//! configuration file.

use odrviewer_scene::PoseError;
use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// No setting is registered under this key.
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// The value kind does not match the setting kind.
    #[error("Setting '{key}' expects {expected} input")]
    TypeMismatch { key: String, expected: String },

    /// The label is not one of the setting's choices.
    #[error("Invalid choice '{label}' for '{key}'")]
    InvalidChoice { key: String, label: String },

    /// The value could not be parsed as a finite number.
    #[error("Invalid number '{value}' for '{key}'")]
    InvalidNumber { key: String, value: String },

    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The configuration file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// The configuration directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A camera preset could not be decoded.
    #[error("Pose error: {0}")]
    Pose(#[from] PoseError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// Two camera presets share a name.
    #[error("Duplicate camera preset: {0}")]
    DuplicatePreset(String),
}

impl From<SettingsError> for odrviewer_core::Error {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::IoError(e) => odrviewer_core::Error::Io(e),
            other => odrviewer_core::Error::other(other.to_string()),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
