//! Collaborator interface of the control panel
//!
//! Every side effect the panel cannot express as a plain visibility or
//! material flag goes through this trait: file selection, map loading,
//! camera framing and presets.

use crate::scene::SceneObjectId;

/// Viewer operations invoked by panel change handlers
///
/// Implementations own their failures; none of these calls report back.
pub trait ViewerBackend {
    /// Show the file-selection UI for a new map
    fn open_file_picker(&mut self);

    /// Rebuild road-network geometry at the current detail level
    fn rebuild_road_network(&mut self, high_detail: bool, force_reload_attributes: bool);

    /// Recompute the camera framing so `target` is fully in view
    fn fit_view_to_object(&mut self, target: SceneObjectId);

    /// Update the camera field-of-view in degrees
    fn set_camera_fov(&mut self, fov: f64);

    /// Toggle transparency of the lane meshes
    fn set_lanes_transparent(&mut self, enabled: bool);

    /// Apply a serialized camera pose, see [`crate::pose`]
    fn apply_camera_pose(&mut self, pose_descriptor: &str);

    /// Re-fetch and re-parse the current map from scratch
    fn reload_map(&mut self);
}
