//! Behavioural tests for the settings synchronizer against a recording backend

use odrviewer_core::{shared, Shared};
use odrviewer_scene::{RoadScene, SceneObjectId, ViewerBackend, S110_S2_POSE};
use odrviewer_settings::{
    PanelAction, Resolution, SettingKey, SettingsSynchronizer, ViewMode, ViewerParams,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    OpenFilePicker,
    Rebuild(bool, bool),
    FitView(SceneObjectId),
    SetFov(f64),
    LanesTransparent(bool),
    Pose(String),
    Reload,
}

#[derive(Default)]
struct RecordingBackend {
    calls: Vec<Call>,
}

impl ViewerBackend for RecordingBackend {
    fn open_file_picker(&mut self) {
        self.calls.push(Call::OpenFilePicker);
    }

    fn rebuild_road_network(&mut self, high_detail: bool, force_reload_attributes: bool) {
        self.calls
            .push(Call::Rebuild(high_detail, force_reload_attributes));
    }

    fn fit_view_to_object(&mut self, target: SceneObjectId) {
        self.calls.push(Call::FitView(target));
    }

    fn set_camera_fov(&mut self, fov: f64) {
        self.calls.push(Call::SetFov(fov));
    }

    fn set_lanes_transparent(&mut self, enabled: bool) {
        self.calls.push(Call::LanesTransparent(enabled));
    }

    fn apply_camera_pose(&mut self, pose_descriptor: &str) {
        self.calls.push(Call::Pose(pose_descriptor.to_string()));
    }

    fn reload_map(&mut self) {
        self.calls.push(Call::Reload);
    }
}

struct Harness {
    sync: SettingsSynchronizer,
    scene: Shared<RoadScene>,
    backend: Shared<RecordingBackend>,
    notifications: Rc<Cell<usize>>,
}

impl Harness {
    fn new() -> Self {
        Self::with_params(ViewerParams::default())
    }

    fn with_params(params: ViewerParams) -> Self {
        let scene = shared(RoadScene::new());
        let backend = shared(RecordingBackend::default());
        let sync = SettingsSynchronizer::new(params, scene.clone(), backend.clone());
        let notifications = Rc::new(Cell::new(0));
        let counter = notifications.clone();
        sync.on_setting_changed(move |_, _| counter.set(counter.get() + 1));
        Self {
            sync,
            scene,
            backend,
            notifications,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.backend.borrow().calls.clone()
    }

    fn visible(&self, id: SceneObjectId) -> bool {
        self.scene.borrow().is_visible(id)
    }
}

#[test]
fn test_medium_resolution_rebuilds_once() {
    let mut h = Harness::new();

    h.sync.update_setting("resolution", "Medium").unwrap();

    assert_eq!(h.calls(), vec![Call::Rebuild(true, false)]);
    assert_eq!(h.sync.params().resolution, Resolution::Medium);
    assert_eq!(h.sync.params().resolution.value(), 0.3);
    assert_eq!(h.notifications.get(), 1);
}

#[test]
fn test_outlines_then_default_restores_roadmarks() {
    let mut h = Harness::new();
    assert!(h.sync.params().roadmarks);

    h.sync.set_view_mode(ViewMode::Outlines);
    assert!(!h.visible(SceneObjectId::RoadmarksMesh));
    assert!(!h.visible(SceneObjectId::RoadNetworkMesh));

    h.sync.set_view_mode(ViewMode::Default);
    assert!(h.visible(SceneObjectId::RoadmarksMesh));
    assert!(h.visible(SceneObjectId::RoadNetworkMesh));
    assert!(h.calls().is_empty());
}

#[test]
fn test_roadmarks_off_in_outlines_stays_off() {
    let mut h = Harness::new();
    h.sync.set_view_mode(ViewMode::Outlines);

    h.sync.set_roadmarks(false);
    assert!(!h.visible(SceneObjectId::RoadmarksMesh));

    h.sync.set_view_mode(ViewMode::Default);
    assert!(!h.visible(SceneObjectId::RoadmarksMesh));
    assert!(h.visible(SceneObjectId::RoadNetworkMesh));
}

#[test]
fn test_view_mode_reselect_is_idempotent() {
    let mut h = Harness::new();
    h.sync.set_view_mode(ViewMode::Outlines);
    let once = h.scene.borrow().clone();

    h.sync.set_view_mode(ViewMode::Outlines);

    assert_eq!(*h.scene.borrow(), once);
    assert_eq!(h.notifications.get(), 2);
}

#[test]
fn test_s110_pose_is_always_the_same_literal() {
    let mut h = Harness::new();
    h.sync.set_fov(20.0);
    h.sync.trigger(PanelAction::SetS110Pos);
    h.sync.set_fov(110.0);
    h.sync.trigger(PanelAction::SetS110Pos);

    let poses: Vec<_> = h
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Pose(_)))
        .collect();
    assert_eq!(
        poses,
        vec![
            Call::Pose(S110_S2_POSE.to_string()),
            Call::Pose(S110_S2_POSE.to_string())
        ]
    );
}

#[test]
fn test_fit_view_and_reload_call_once_per_trigger() {
    let mut h = Harness::new();

    h.sync.trigger(PanelAction::FitView);
    assert_eq!(h.calls(), vec![Call::FitView(SceneObjectId::ReferenceLine)]);

    h.sync.trigger(PanelAction::ReloadMap);
    h.sync.trigger(PanelAction::ReloadMap);
    assert_eq!(
        h.calls(),
        vec![
            Call::FitView(SceneObjectId::ReferenceLine),
            Call::Reload,
            Call::Reload
        ]
    );
    assert_eq!(*h.sync.params(), ViewerParams::default());
}

#[test]
fn test_load_file_opens_picker() {
    let mut h = Harness::new();
    h.sync.update_setting("load_file", "").unwrap();
    assert_eq!(h.calls(), vec![Call::OpenFilePicker]);
}

#[test]
fn test_action_with_value_is_rejected() {
    let mut h = Harness::new();

    let err = h.sync.update_setting("fitView", "garbage").unwrap_err();

    assert_eq!(err.to_string(), "Setting 'fitView' expects action input");
    assert!(h.calls().is_empty());
    assert_eq!(h.notifications.get(), 0);
}

#[test]
fn test_stored_only_keys_make_no_calls() {
    let mut h = Harness::new();
    for key in ["spotlight", "lateralProfile", "laneHeight"] {
        h.sync.update_setting(key, "true").unwrap();
    }

    assert!(h.calls().is_empty());
    assert_eq!(h.notifications.get(), 3);
    assert!(h.sync.spotlight());
}

#[test]
fn test_rejected_update_notifies_nobody() {
    let mut h = Harness::new();
    assert!(h.sync.update_setting("view_mode", "Wireframe").is_err());
    assert_eq!(h.notifications.get(), 0);
    assert!(h.calls().is_empty());
}

#[test]
fn test_descriptors_cover_every_key() {
    let h = Harness::new();
    let keys: Vec<_> = h.sync.descriptors().iter().map(|d| d.key).collect();
    assert_eq!(keys, SettingKey::ALL.to_vec());
}

proptest! {
    #[test]
    fn prop_fov_forwarded_exactly_once(fov in -1000.0f64..1000.0) {
        let mut h = Harness::new();
        h.sync.set_fov(fov);
        prop_assert_eq!(h.calls(), vec![Call::SetFov(fov)]);
        prop_assert_eq!(h.sync.params().fov, fov);
    }

    #[test]
    fn prop_direct_toggles_match_last_value(values in proptest::collection::vec(any::<bool>(), 1..8)) {
        let mut h = Harness::new();
        for &v in &values {
            h.sync.set_ref_line(v);
            h.sync.set_wireframe(v);
            h.sync.set_roadmarks(v);
            h.sync.set_transparent_lanes(v);
        }

        let last = *values.last().unwrap();
        prop_assert_eq!(h.visible(SceneObjectId::ReferenceLine), last);
        prop_assert_eq!(h.visible(SceneObjectId::RoadmarksMesh), last);
        prop_assert_eq!(h.visible(SceneObjectId::RoadmarkOutlines), last);
        prop_assert_eq!(h.scene.borrow().road_network_material.wireframe, last);
        prop_assert_eq!(h.notifications.get(), values.len() * 4);

        let transparency: Vec<_> = values.iter().map(|&v| Call::LanesTransparent(v)).collect();
        prop_assert_eq!(h.calls(), transparency);
    }
}
