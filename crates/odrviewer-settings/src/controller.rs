//! Settings Synchronizer
//!
//! Owns the panel registry and applies every change to the render state.
//! Each stored change runs exactly one handler: a direct visibility or
//! material assignment on the scene, or one call on the [`ViewerBackend`].
//! The value is stored before the handler runs, and listeners are notified
//! after it.

use crate::error::{SettingsError, SettingsResult};
use crate::params::{MapLoadOptions, PanelAction, Resolution, SettingKey, ViewMode, ViewerParams};
use crate::view_model::{descriptors, SettingDescriptor, SettingKind, SettingValue};
use odrviewer_core::{Shared, SharedVec};
use odrviewer_scene::{NamedPose, RoadScene, SceneObjectId, ViewerBackend, S110_S2_POSE};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Callback notified with each stored change
pub type SettingListener = Box<dyn Fn(SettingKey, &SettingValue)>;

/// Binds the panel registry to a scene and a viewer backend
pub struct SettingsSynchronizer {
    params: ViewerParams,
    scene: Shared<RoadScene>,
    backend: Shared<dyn ViewerBackend>,
    listeners: SharedVec<SettingListener>,
}

impl SettingsSynchronizer {
    /// Create a synchronizer over explicit scene and backend handles.
    ///
    /// The scene is not touched until the first change; call
    /// [`resync_scene`](Self::resync_scene) to push `params` onto it.
    pub fn new(
        params: ViewerParams,
        scene: Shared<RoadScene>,
        backend: Shared<dyn ViewerBackend>,
    ) -> Self {
        Self {
            params,
            scene,
            backend,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a callback to be notified when a setting changes
    pub fn on_setting_changed<F>(&self, callback: F)
    where
        F: Fn(SettingKey, &SettingValue) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    pub fn params(&self) -> &ViewerParams {
        &self.params
    }

    pub fn value(&self, key: SettingKey) -> SettingValue {
        self.params.value(key)
    }

    pub fn descriptors(&self) -> Vec<SettingDescriptor> {
        descriptors()
    }

    pub fn scene(&self) -> &Shared<RoadScene> {
        &self.scene
    }

    /// Read by the renderer when it sets up lighting
    pub fn spotlight(&self) -> bool {
        self.params.spotlight
    }

    /// Read by the map loader before it builds geometry
    pub fn map_load_options(&self) -> MapLoadOptions {
        self.params.map_load_options()
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.params.resolution = resolution;
        debug!(value = resolution.value(), "Detail set to {}", resolution);
        self.backend.borrow_mut().rebuild_road_network(true, false);
        self.notify(SettingKey::Resolution);
    }

    pub fn set_spotlight(&mut self, enabled: bool) {
        self.params.spotlight = enabled;
        debug!(enabled, "Spotlight stored");
        self.notify(SettingKey::Spotlight);
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.params.fov = fov;
        self.backend.borrow_mut().set_camera_fov(fov);
        self.notify(SettingKey::Fov);
    }

    pub fn set_transparent_lanes(&mut self, enabled: bool) {
        self.params.transparent_lanes = enabled;
        self.backend.borrow_mut().set_lanes_transparent(enabled);
        self.notify(SettingKey::TransparentLanes);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.params.view_mode = mode;
        debug!("View mode set to {}", mode);
        self.apply_view_mode();
        self.notify(SettingKey::ViewMode);
    }

    pub fn set_ref_line(&mut self, visible: bool) {
        self.params.ref_line = visible;
        self.scene
            .borrow_mut()
            .set_visible(SceneObjectId::ReferenceLine, visible);
        self.notify(SettingKey::RefLine);
    }

    /// Drives both roadmark objects. While outlines mode is active the
    /// roadmark mesh stays hidden; the toggle takes effect on the next
    /// switch back to the default mode.
    pub fn set_roadmarks(&mut self, visible: bool) {
        self.params.roadmarks = visible;
        {
            let mut scene = self.scene.borrow_mut();
            scene.set_visible(SceneObjectId::RoadmarksMesh, self.roadmark_mesh_visible());
            scene.set_visible(SceneObjectId::RoadmarkOutlines, visible);
        }
        self.notify(SettingKey::Roadmarks);
    }

    pub fn set_wireframe(&mut self, enabled: bool) {
        self.params.wireframe = enabled;
        self.scene.borrow_mut().road_network_material.wireframe = enabled;
        self.notify(SettingKey::Wireframe);
    }

    pub fn set_lateral_profile(&mut self, enabled: bool) {
        self.params.lateral_profile = enabled;
        self.notify(SettingKey::LateralProfile);
    }

    pub fn set_lane_height(&mut self, enabled: bool) {
        self.params.lane_height = enabled;
        self.notify(SettingKey::LaneHeight);
    }

    /// Fire a panel button
    pub fn trigger(&mut self, action: PanelAction) {
        info!("Panel action: {}", action.key());
        {
            let mut backend = self.backend.borrow_mut();
            match action {
                PanelAction::LoadFile => backend.open_file_picker(),
                PanelAction::FitView => backend.fit_view_to_object(SceneObjectId::ReferenceLine),
                PanelAction::SetS110Pos => backend.apply_camera_pose(S110_S2_POSE),
                PanelAction::ReloadMap => backend.reload_map(),
            }
        }
        self.notify(action.key());
    }

    /// Apply a camera preset from the panel configuration
    pub fn apply_camera_preset(&mut self, preset: &NamedPose) {
        match preset.pose.to_json() {
            Ok(descriptor) => {
                info!("Applying camera preset '{}'", preset.name);
                self.backend.borrow_mut().apply_camera_pose(&descriptor);
            }
            Err(e) => warn!("Cannot encode camera preset '{}': {}", preset.name, e),
        }
    }

    /// Typed entry point for control surfaces that work with [`SettingValue`]
    pub fn set_value(&mut self, key: SettingKey, value: SettingValue) -> SettingsResult<()> {
        if value.kind() != key.kind() {
            return Err(SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: key.kind().to_string(),
            });
        }

        match (key, value) {
            (SettingKey::Resolution, SettingValue::Choice(label)) => {
                let resolution = Resolution::from_label(&label)
                    .ok_or_else(|| invalid_choice(key, &label))?;
                self.set_resolution(resolution);
            }
            (SettingKey::ViewMode, SettingValue::Choice(label)) => {
                let mode =
                    ViewMode::from_label(&label).ok_or_else(|| invalid_choice(key, &label))?;
                self.set_view_mode(mode);
            }
            (SettingKey::Fov, SettingValue::Number(fov)) => self.set_fov(fov),
            (SettingKey::Spotlight, SettingValue::Boolean(b)) => self.set_spotlight(b),
            (SettingKey::TransparentLanes, SettingValue::Boolean(b)) => {
                self.set_transparent_lanes(b)
            }
            (SettingKey::RefLine, SettingValue::Boolean(b)) => self.set_ref_line(b),
            (SettingKey::Roadmarks, SettingValue::Boolean(b)) => self.set_roadmarks(b),
            (SettingKey::Wireframe, SettingValue::Boolean(b)) => self.set_wireframe(b),
            (SettingKey::LateralProfile, SettingValue::Boolean(b)) => self.set_lateral_profile(b),
            (SettingKey::LaneHeight, SettingValue::Boolean(b)) => self.set_lane_height(b),
            (key, SettingValue::Action) => {
                if let Some(action) = key.action() {
                    self.trigger(action);
                }
            }
            // Kinds were checked above, every remaining pairing is a key/kind mismatch
            (key, _) => {
                return Err(SettingsError::TypeMismatch {
                    key: key.to_string(),
                    expected: key.kind().to_string(),
                })
            }
        }
        Ok(())
    }

    /// Update a setting from its panel key and string input.
    ///
    /// Nothing is stored or invoked when the key or value is rejected.
    pub fn update_setting(&mut self, id: &str, value: &str) -> SettingsResult<()> {
        let key: SettingKey = id
            .parse()
            .map_err(SettingsError::UnknownSetting)?;
        let value = value.trim();

        let parsed = match key.kind() {
            SettingKind::Action if value.is_empty() => SettingValue::Action,
            SettingKind::Action => {
                return Err(SettingsError::TypeMismatch {
                    key: key.to_string(),
                    expected: SettingKind::Action.to_string(),
                })
            }
            SettingKind::Toggle => SettingValue::Boolean(value.parse().map_err(|_| {
                SettingsError::TypeMismatch {
                    key: key.to_string(),
                    expected: SettingKind::Toggle.to_string(),
                }
            })?),
            SettingKind::Number => {
                let number: f64 = value.parse().map_err(|_| invalid_number(key, value))?;
                if !number.is_finite() {
                    return Err(invalid_number(key, value));
                }
                SettingValue::Number(number)
            }
            SettingKind::Choice => SettingValue::Choice(value.to_string()),
        };

        self.set_value(key, parsed)
    }

    /// Re-apply stored visibility and material flags to a freshly built scene.
    ///
    /// Only touches the scene; no backend call is made and no listener fires.
    pub fn resync_scene(&mut self) {
        {
            let mut scene = self.scene.borrow_mut();
            scene.set_visible(SceneObjectId::ReferenceLine, self.params.ref_line);
            scene.set_visible(SceneObjectId::RoadmarkOutlines, self.params.roadmarks);
            scene.road_network_material.wireframe = self.params.wireframe;
        }
        self.apply_view_mode();
    }

    fn apply_view_mode(&self) {
        let mut scene = self.scene.borrow_mut();
        scene.set_visible(
            SceneObjectId::RoadNetworkMesh,
            self.params.view_mode == ViewMode::Default,
        );
        scene.set_visible(SceneObjectId::RoadmarksMesh, self.roadmark_mesh_visible());
    }

    fn roadmark_mesh_visible(&self) -> bool {
        match self.params.view_mode {
            ViewMode::Default => self.params.roadmarks,
            ViewMode::Outlines => false,
        }
    }

    fn notify(&self, key: SettingKey) {
        let value = self.params.value(key);
        let listeners = self.listeners.borrow();
        for listener in listeners.iter() {
            listener(key, &value);
        }
    }
}

fn invalid_choice(key: SettingKey, label: &str) -> SettingsError {
    SettingsError::InvalidChoice {
        key: key.to_string(),
        label: label.to_string(),
    }
}

fn invalid_number(key: SettingKey, value: &str) -> SettingsError {
    SettingsError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    }
}
