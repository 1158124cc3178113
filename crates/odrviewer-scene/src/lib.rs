//! # OdrViewer Scene
//!
//! Render-state handles the control panel mutates:
//! - Scene objects with visibility flags and the shared road-network material
//! - A perspective camera with pose presets and bounding-box framing
//! - The [`ViewerBackend`] trait naming every collaborator call of the panel,
//!   and [`SceneViewer`], the implementation bound to a live scene

pub mod backend;
pub mod camera;
pub mod pose;
pub mod scene;
pub mod viewer;

pub use backend::ViewerBackend;
pub use camera::Camera;
pub use pose::{CameraPose, NamedPose, PoseError, PosePoint, S110_S2_POSE};
pub use scene::{Aabb, Material, RoadScene, SceneObject, SceneObjectId};
pub use viewer::{FilePicker, MapRequest, NoFilePicker, SceneViewer};
