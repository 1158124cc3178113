//! Panel parameters
//!
//! The registry of every setting the control panel exposes, with the
//! startup defaults of the viewer. Keys keep the names the panel has always
//! used (`fitView`, `transparentLanes`, ...) so saved bindings stay valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of a registered setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    LoadFile,
    Resolution,
    Spotlight,
    FitView,
    Fov,
    TransparentLanes,
    SetS110Pos,
    ViewMode,
    RefLine,
    Roadmarks,
    Wireframe,
    LateralProfile,
    LaneHeight,
    ReloadMap,
}

impl SettingKey {
    /// All keys in panel registration order
    pub const ALL: [SettingKey; 14] = [
        SettingKey::LoadFile,
        SettingKey::Resolution,
        SettingKey::Spotlight,
        SettingKey::FitView,
        SettingKey::Fov,
        SettingKey::TransparentLanes,
        SettingKey::SetS110Pos,
        SettingKey::ViewMode,
        SettingKey::RefLine,
        SettingKey::Roadmarks,
        SettingKey::Wireframe,
        SettingKey::LateralProfile,
        SettingKey::LaneHeight,
        SettingKey::ReloadMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadFile => "load_file",
            Self::Resolution => "resolution",
            Self::Spotlight => "spotlight",
            Self::FitView => "fitView",
            Self::Fov => "fov",
            Self::TransparentLanes => "transparentLanes",
            Self::SetS110Pos => "set_s110_pos",
            Self::ViewMode => "view_mode",
            Self::RefLine => "ref_line",
            Self::Roadmarks => "roadmarks",
            Self::Wireframe => "wireframe",
            Self::LateralProfile => "lateralProfile",
            Self::LaneHeight => "laneHeight",
            Self::ReloadMap => "reload_map",
        }
    }

    /// The action fired by this key, if it is an action
    pub fn action(&self) -> Option<PanelAction> {
        match self {
            Self::LoadFile => Some(PanelAction::LoadFile),
            Self::FitView => Some(PanelAction::FitView),
            Self::SetS110Pos => Some(PanelAction::SetS110Pos),
            Self::ReloadMap => Some(PanelAction::ReloadMap),
            _ => None,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One-shot panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// Open the file picker for a new map
    LoadFile,
    /// Frame the reference line
    FitView,
    /// Jump to the S110 S2 camera preset
    SetS110Pos,
    /// Re-read the current map
    ReloadMap,
}

impl PanelAction {
    pub fn key(&self) -> SettingKey {
        match self {
            Self::LoadFile => SettingKey::LoadFile,
            Self::FitView => SettingKey::FitView,
            Self::SetS110Pos => SettingKey::SetS110Pos,
            Self::ReloadMap => SettingKey::ReloadMap,
        }
    }
}

/// Geometry detail level. The value is the sampling step handed to the
/// map loader, so smaller means finer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    Low,
    Medium,
    High,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Low, Resolution::Medium, Resolution::High];

    pub fn value(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 0.3,
            Self::High => 0.02,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the road network is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Lane surfaces plus roadmarks
    #[default]
    Default,
    /// Outline lines only
    Outlines,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Default, ViewMode::Outlines];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Outlines => "Outlines",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current value of every stored setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerParams {
    pub resolution: Resolution,
    pub ref_line: bool,
    pub roadmarks: bool,
    pub wireframe: bool,
    pub spotlight: bool,
    pub lateral_profile: bool,
    pub lane_height: bool,
    pub transparent_lanes: bool,
    pub view_mode: ViewMode,
    /// Camera field-of-view in degrees
    pub fov: f64,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            resolution: Resolution::Low,
            ref_line: false,
            roadmarks: true,
            wireframe: false,
            spotlight: false,
            lateral_profile: false,
            lane_height: false,
            transparent_lanes: false,
            view_mode: ViewMode::Default,
            fov: 75.0,
        }
    }
}

impl ViewerParams {
    pub fn map_load_options(&self) -> MapLoadOptions {
        MapLoadOptions {
            resolution: self.resolution.value(),
            with_lateral_profile: self.lateral_profile,
            with_lane_height: self.lane_height,
        }
    }
}

/// Settings the map loader reads when it (re)builds the road network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLoadOptions {
    /// Sampling step for mesh generation
    pub resolution: f64,
    pub with_lateral_profile: bool,
    pub with_lane_height: bool,
}
