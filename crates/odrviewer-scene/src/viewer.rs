//! Scene-bound viewer backend
//!
//! [`SceneViewer`] applies camera and material changes directly and turns
//! map loading calls into [`MapRequest`]s. Parsing `.xodr` files and building
//! meshes is the map loader's job; it drains the queue between frames.

use crate::backend::ViewerBackend;
use crate::camera::Camera;
use crate::pose::CameraPose;
use crate::scene::{RoadScene, SceneObjectId};
use odrviewer_core::Shared;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Opacity of lane meshes while transparent lanes are enabled
const TRANSPARENT_LANE_OPACITY: f32 = 0.5;

/// Source of map file paths chosen by the user
pub trait FilePicker {
    /// Returns `None` when the user cancels
    fn pick_map_file(&mut self) -> Option<PathBuf>;
}

/// Picker for headless use; never selects anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFilePicker;

impl FilePicker for NoFilePicker {
    fn pick_map_file(&mut self) -> Option<PathBuf> {
        None
    }
}

/// Work queued for the map loader
#[derive(Debug, Clone, PartialEq)]
pub enum MapRequest {
    /// Load a newly selected map file
    Load(PathBuf),
    /// Rebuild geometry of the current map
    Rebuild {
        high_detail: bool,
        force_reload_attributes: bool,
    },
    /// Re-read the current map source from scratch
    Reload,
}

pub struct SceneViewer {
    scene: Shared<RoadScene>,
    camera: Shared<Camera>,
    picker: Box<dyn FilePicker>,
    requests: VecDeque<MapRequest>,
    current_map: Option<PathBuf>,
}

impl SceneViewer {
    pub fn new(scene: Shared<RoadScene>, camera: Shared<Camera>) -> Self {
        Self::with_picker(scene, camera, Box::new(NoFilePicker))
    }

    pub fn with_picker(
        scene: Shared<RoadScene>,
        camera: Shared<Camera>,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        Self {
            scene,
            camera,
            picker,
            requests: VecDeque::new(),
            current_map: None,
        }
    }

    pub fn scene(&self) -> &Shared<RoadScene> {
        &self.scene
    }

    pub fn camera(&self) -> &Shared<Camera> {
        &self.camera
    }

    /// Path of the most recently selected map, if any
    pub fn current_map(&self) -> Option<&Path> {
        self.current_map.as_deref()
    }

    /// Record a map selected outside the picker (command line, drag and drop)
    pub fn open_map(&mut self, path: PathBuf) {
        info!("Queueing map load: {}", path.display());
        self.current_map = Some(path.clone());
        self.requests.push_back(MapRequest::Load(path));
    }

    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }

    /// Hand all queued requests to the map loader, oldest first
    pub fn drain_requests(&mut self) -> Vec<MapRequest> {
        self.requests.drain(..).collect()
    }
}

impl ViewerBackend for SceneViewer {
    fn open_file_picker(&mut self) {
        match self.picker.pick_map_file() {
            Some(path) => self.open_map(path),
            None => debug!("File selection cancelled"),
        }
    }

    fn rebuild_road_network(&mut self, high_detail: bool, force_reload_attributes: bool) {
        debug!(high_detail, force_reload_attributes, "Queueing road network rebuild");
        self.requests.push_back(MapRequest::Rebuild {
            high_detail,
            force_reload_attributes,
        });
    }

    fn fit_view_to_object(&mut self, target: SceneObjectId) {
        let bounds = self.scene.borrow().object(target).bounds;
        match bounds {
            Some(bounds) => {
                self.camera.borrow_mut().fit_to_bounds(&bounds);
                debug!("Camera framed on {}", target);
            }
            None => warn!("Cannot fit view: {} has no geometry", target),
        }
    }

    fn set_camera_fov(&mut self, fov: f64) {
        self.camera.borrow_mut().set_fov(fov as f32);
    }

    fn set_lanes_transparent(&mut self, enabled: bool) {
        let mut scene = self.scene.borrow_mut();
        let material = &mut scene.road_network_material;
        material.transparent = enabled;
        material.opacity = if enabled {
            TRANSPARENT_LANE_OPACITY
        } else {
            1.0
        };
    }

    fn apply_camera_pose(&mut self, pose_descriptor: &str) {
        match CameraPose::from_json(pose_descriptor) {
            Ok(pose) => self.camera.borrow_mut().apply_pose(&pose),
            Err(e) => warn!("Ignoring camera pose: {}", e),
        }
    }

    fn reload_map(&mut self) {
        if self.current_map.is_none() {
            debug!("Reload requested before any map was selected");
        }
        self.requests.push_back(MapRequest::Reload);
    }
}
