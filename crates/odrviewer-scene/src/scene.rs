//! Road-network scene objects
//!
//! The map loader builds four renderable objects from a road network: the
//! lane surface mesh, the roadmark mesh, roadmark outline lines and the
//! reference-line overlay. The panel only ever touches their visibility and
//! the shared material the lane meshes are drawn with.

use glam::Vec3;
use std::fmt;

/// Identifies one of the scene objects the panel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObjectId {
    /// Lane surface mesh of the whole road network
    RoadNetworkMesh,
    /// Filled roadmark geometry
    RoadmarksMesh,
    /// Outline lines around each roadmark
    RoadmarkOutlines,
    /// Road reference-line overlay
    ReferenceLine,
}

impl SceneObjectId {
    /// All objects, in draw order
    pub const ALL: [SceneObjectId; 4] = [
        SceneObjectId::RoadNetworkMesh,
        SceneObjectId::RoadmarksMesh,
        SceneObjectId::RoadmarkOutlines,
        SceneObjectId::ReferenceLine,
    ];
}

impl fmt::Display for SceneObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoadNetworkMesh => write!(f, "road_network_mesh"),
            Self::RoadmarksMesh => write!(f, "roadmarks_mesh"),
            Self::RoadmarkOutlines => write!(f, "roadmark_outline_lines"),
            Self::ReferenceLine => write!(f, "refline_lines"),
        }
    }
}

/// Axis-aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// A renderable entity with a visibility flag
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub visible: bool,
    /// World bounds, unset until geometry has been loaded
    pub bounds: Option<Aabb>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
            bounds: None,
        }
    }
}

/// Material shared by every lane of the road-network mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub wireframe: bool,
    pub transparent: bool,
    pub opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            wireframe: false,
            transparent: false,
            opacity: 1.0,
        }
    }
}

/// Render state of a loaded road network
#[derive(Debug, Clone, PartialEq)]
pub struct RoadScene {
    pub road_network_mesh: SceneObject,
    pub roadmarks_mesh: SceneObject,
    pub roadmark_outline_lines: SceneObject,
    pub refline_lines: SceneObject,
    pub road_network_material: Material,
}

impl Default for RoadScene {
    fn default() -> Self {
        Self {
            road_network_mesh: SceneObject::new(SceneObjectId::RoadNetworkMesh.to_string(), true),
            roadmarks_mesh: SceneObject::new(SceneObjectId::RoadmarksMesh.to_string(), true),
            roadmark_outline_lines: SceneObject::new(
                SceneObjectId::RoadmarkOutlines.to_string(),
                true,
            ),
            refline_lines: SceneObject::new(SceneObjectId::ReferenceLine.to_string(), false),
            road_network_material: Material::default(),
        }
    }
}

impl RoadScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, id: SceneObjectId) -> &SceneObject {
        match id {
            SceneObjectId::RoadNetworkMesh => &self.road_network_mesh,
            SceneObjectId::RoadmarksMesh => &self.roadmarks_mesh,
            SceneObjectId::RoadmarkOutlines => &self.roadmark_outline_lines,
            SceneObjectId::ReferenceLine => &self.refline_lines,
        }
    }

    pub fn object_mut(&mut self, id: SceneObjectId) -> &mut SceneObject {
        match id {
            SceneObjectId::RoadNetworkMesh => &mut self.road_network_mesh,
            SceneObjectId::RoadmarksMesh => &mut self.roadmarks_mesh,
            SceneObjectId::RoadmarkOutlines => &mut self.roadmark_outline_lines,
            SceneObjectId::ReferenceLine => &mut self.refline_lines,
        }
    }

    pub fn is_visible(&self, id: SceneObjectId) -> bool {
        self.object(id).visible
    }

    pub fn set_visible(&mut self, id: SceneObjectId, visible: bool) {
        self.object_mut(id).visible = visible;
    }

    pub fn set_bounds(&mut self, id: SceneObjectId, bounds: Aabb) {
        self.object_mut(id).bounds = Some(bounds);
    }
}
