//! # OdrViewer
//!
//! Control panel for an OpenDRIVE road network viewer. The panel exposes a
//! fixed set of settings (detail level, view mode, overlay toggles, camera
//! field-of-view, camera presets) and applies each change to the live scene.
//!
//! ## Architecture
//!
//! 1. **odrviewer-core** - Error type and shared-state aliases
//! 2. **odrviewer-scene** - Scene objects, material, camera, viewer backend
//! 3. **odrviewer-settings** - Settings registry, synchronizer, panel config
//! 4. **odrviewer** - Logging setup and a line-based panel driver

pub mod driver;
pub mod picker;

pub use driver::{Flow, PanelDriver};
pub use picker::NativeFilePicker;

pub use odrviewer_core::{shared, Error, Result, Shared};
pub use odrviewer_scene::{
    Camera, CameraPose, MapRequest, RoadScene, SceneObjectId, SceneViewer, ViewerBackend,
};
pub use odrviewer_settings::{
    PanelAction, PanelConfig, Resolution, SettingKey, SettingValue, SettingsSynchronizer,
    ViewMode, ViewerParams,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Panel output goes to stdout, so logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
