//! Camera pose descriptors
//!
//! A pose is exchanged as a JSON string of the form
//! `{"pos":{"x":..,"y":..,"z":..},"target":{"x":..,"y":..,"z":..},"fov":..}`.
//! This is the format the viewer copies to the clipboard when saving a view,
//! so presets can be pasted in verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Camera preset looking at the S110 S2 intersection
pub const S110_S2_POSE: &str = r#"{"pos":{"x":-344.3749308018508,"y":-154.2366395485481,"z":490.9618693021238},"target":{"x":-362.8370945913416,"y":-163.8077366293494,"z":483.4264373779297},"fov":49}"#;

/// Errors raised while decoding a pose descriptor
#[derive(Error, Debug)]
pub enum PoseError {
    /// The descriptor is not valid pose JSON
    #[error("Invalid camera pose: {0}")]
    Parse(#[from] serde_json::Error),

    /// A coordinate or the field-of-view is NaN or infinite
    #[error("Camera pose field '{0}' is not finite")]
    NonFinite(&'static str),
}

/// A point in world coordinates, double precision as stored in the descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PosePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Camera position, look-at target and vertical field-of-view in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub pos: PosePoint,
    pub target: PosePoint,
    pub fov: f64,
}

impl CameraPose {
    /// Decode a pose descriptor
    pub fn from_json(descriptor: &str) -> Result<Self, PoseError> {
        let pose: CameraPose = serde_json::from_str(descriptor)?;
        pose.validate()?;
        Ok(pose)
    }

    /// Encode as a pose descriptor
    pub fn to_json(&self) -> Result<String, PoseError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), PoseError> {
        if !self.pos.is_finite() {
            return Err(PoseError::NonFinite("pos"));
        }
        if !self.target.is_finite() {
            return Err(PoseError::NonFinite("target"));
        }
        if !self.fov.is_finite() {
            return Err(PoseError::NonFinite("fov"));
        }
        Ok(())
    }

    /// The built-in S110 S2 preset
    pub fn s110_s2() -> Self {
        Self {
            pos: PosePoint::new(-344.3749308018508, -154.2366395485481, 490.9618693021238),
            target: PosePoint::new(-362.8370945913416, -163.8077366293494, 483.4264373779297),
            fov: 49.0,
        }
    }
}

/// A pose with a display name, as stored in the panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPose {
    pub name: String,
    pub pose: CameraPose,
}
