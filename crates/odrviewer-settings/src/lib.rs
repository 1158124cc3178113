//! # OdrViewer Settings
//!
//! The control panel's settings registry and the synchronizer that turns
//! each setting change into exactly one scene, material, camera or map
//! loader side effect. Also handles the panel configuration file.

pub mod config;
pub mod controller;
pub mod error;
pub mod params;
pub mod view_model;

pub use config::PanelConfig;
pub use controller::{SettingListener, SettingsSynchronizer};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use params::{MapLoadOptions, PanelAction, Resolution, SettingKey, ViewMode, ViewerParams};
pub use view_model::{descriptors, PanelFolder, SettingDescriptor, SettingKind, SettingValue};
