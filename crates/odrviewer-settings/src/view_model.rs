//! Panel view model
//!
//! What a control surface needs to draw the panel: one descriptor per
//! setting with its label, folder and kind, plus dynamically typed values.

use crate::params::{Resolution, SettingKey, ViewMode, ViewerParams};
use std::fmt;

/// Dynamically typed setting value, as exchanged with the control surface
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Boolean(bool),
    Number(f64),
    /// Label of the selected choice
    Choice(String),
    /// Actions carry no value
    Action,
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Boolean(_) => SettingKind::Toggle,
            Self::Number(_) => SettingKind::Number,
            Self::Choice(_) => SettingKind::Choice,
            Self::Action => SettingKind::Action,
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            Self::Boolean(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Choice(label) => label.clone(),
            Self::Action => String::new(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Kind of control used for a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Toggle,
    Number,
    Choice,
    Action,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toggle => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::Choice => write!(f, "choice"),
            Self::Action => write!(f, "action"),
        }
    }
}

/// Panel section a setting is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFolder {
    Root,
    View,
    LoadAttributes,
}

impl fmt::Display for PanelFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, ""),
            Self::View => write!(f, "View"),
            Self::LoadAttributes => write!(f, "Load Attributes"),
        }
    }
}

/// Static description of one panel control
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDescriptor {
    pub key: SettingKey,
    pub label: &'static str,
    pub folder: PanelFolder,
    pub kind: SettingKind,
    /// Choice labels in display order, empty for other kinds
    pub options: Vec<&'static str>,
}

impl SettingKey {
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::LoadFile | Self::FitView | Self::SetS110Pos | Self::ReloadMap => {
                SettingKind::Action
            }
            Self::Resolution | Self::ViewMode => SettingKind::Choice,
            Self::Fov => SettingKind::Number,
            Self::Spotlight
            | Self::TransparentLanes
            | Self::RefLine
            | Self::Roadmarks
            | Self::Wireframe
            | Self::LateralProfile
            | Self::LaneHeight => SettingKind::Toggle,
        }
    }

    pub fn descriptor(&self) -> SettingDescriptor {
        let (label, folder) = match self {
            Self::LoadFile => ("📁 Load .xodr", PanelFolder::Root),
            Self::Resolution => ("📏  Detail", PanelFolder::Root),
            Self::Spotlight => ("🔦 Spotlight", PanelFolder::Root),
            Self::FitView => ("⟲ Reset Camera", PanelFolder::Root),
            Self::Fov => ("👀 Camera FOV", PanelFolder::Root),
            Self::TransparentLanes => ("👀 Transparent Lanes", PanelFolder::Root),
            Self::SetS110Pos => ("Set S110 S2 Camera Position", PanelFolder::Root),
            Self::ViewMode => ("View Mode", PanelFolder::View),
            Self::RefLine => ("Reference Line", PanelFolder::View),
            Self::Roadmarks => ("Roadmarks", PanelFolder::View),
            Self::Wireframe => ("Wireframe", PanelFolder::View),
            Self::LateralProfile => ("Lateral Profile", PanelFolder::LoadAttributes),
            Self::LaneHeight => ("Lane Height", PanelFolder::LoadAttributes),
            Self::ReloadMap => ("Reload Map", PanelFolder::LoadAttributes),
        };

        let options = match self {
            Self::Resolution => Resolution::ALL.iter().map(|r| r.label()).collect(),
            Self::ViewMode => ViewMode::ALL.iter().map(|m| m.label()).collect(),
            _ => Vec::new(),
        };

        SettingDescriptor {
            key: *self,
            label,
            folder,
            kind: self.kind(),
            options,
        }
    }
}

/// Descriptors for the whole panel, in registration order
pub fn descriptors() -> Vec<SettingDescriptor> {
    SettingKey::ALL.iter().map(|key| key.descriptor()).collect()
}

impl ViewerParams {
    /// Current value of `key`; actions report [`SettingValue::Action`]
    pub fn value(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::LoadFile
            | SettingKey::FitView
            | SettingKey::SetS110Pos
            | SettingKey::ReloadMap => SettingValue::Action,
            SettingKey::Resolution => SettingValue::Choice(self.resolution.label().to_string()),
            SettingKey::ViewMode => SettingValue::Choice(self.view_mode.label().to_string()),
            SettingKey::Fov => SettingValue::Number(self.fov),
            SettingKey::Spotlight => SettingValue::Boolean(self.spotlight),
            SettingKey::TransparentLanes => SettingValue::Boolean(self.transparent_lanes),
            SettingKey::RefLine => SettingValue::Boolean(self.ref_line),
            SettingKey::Roadmarks => SettingValue::Boolean(self.roadmarks),
            SettingKey::Wireframe => SettingValue::Boolean(self.wireframe),
            SettingKey::LateralProfile => SettingValue::Boolean(self.lateral_profile),
            SettingKey::LaneHeight => SettingValue::Boolean(self.lane_height),
        }
    }
}
