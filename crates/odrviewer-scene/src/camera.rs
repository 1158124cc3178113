use crate::pose::{CameraPose, PosePoint};
use crate::scene::Aabb;
use glam::Vec3;

/// Perspective camera looking from `position` at `target`, Z-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32, // degrees
    /// Closest distance `fit_to_bounds` backs off to is ten times this
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -100.0, 100.0),
            target: Vec3::ZERO,
            fov: 75.0,
            near: 0.1,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, fov: f32) -> Self {
        Self {
            position,
            target,
            fov,
            ..Default::default()
        }
    }

    /// Stored as given, no bounds are enforced
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.position = to_vec3(pose.pos);
        self.target = to_vec3(pose.target);
        self.fov = pose.fov as f32;
    }

    /// Centre the target on `bounds` and back off along the current viewing
    /// direction until the box fits the vertical field-of-view.
    pub fn fit_to_bounds(&mut self, bounds: &Aabb) {
        let center = bounds.center();
        let max_dim = bounds.size().max_element();

        let mut direction = (self.position - self.target).normalize_or_zero();
        if direction == Vec3::ZERO {
            direction = Vec3::new(0.0, -1.0, 1.0).normalize();
        }

        // tan(fov/2) = (size/2) / distance, 1.2 for margin
        let half_fov = (self.fov.to_radians() / 2.0).tan();
        let distance = if half_fov > f32::EPSILON {
            (max_dim * 1.2) / half_fov
        } else {
            max_dim * 1.2
        };

        self.target = center;
        self.position = center + direction * distance.max(self.near * 10.0);
    }
}

fn to_vec3(p: PosePoint) -> Vec3 {
    Vec3::new(p.x as f32, p.y as f32, p.z as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_apply_pose_overwrites_everything() {
        let mut camera = Camera::new(Vec3::splat(3.0), Vec3::ONE, 30.0);
        camera.apply_pose(&CameraPose::s110_s2());

        assert_eq!(camera.fov, 49.0);
        assert!((camera.position.x - -344.37493).abs() < 1e-3);
        assert!((camera.target.z - 483.42644).abs() < 1e-3);
    }

    #[test]
    fn test_fit_to_bounds_centres_target() {
        let mut camera = Camera::default();
        let bounds = Aabb::new(Vec3::new(10.0, 10.0, 0.0), Vec3::new(30.0, 50.0, 4.0));

        camera.fit_to_bounds(&bounds);

        assert_eq!(camera.target, Vec3::new(20.0, 30.0, 2.0));
        let expected = 40.0 * 1.2 / (75.0f32.to_radians() / 2.0).tan();
        assert!((camera.distance() - expected).abs() < 1e-2);
    }

    #[test]
    fn test_fit_to_bounds_keeps_view_direction() {
        let mut camera = Camera::new(Vec3::new(0.0, -10.0, 10.0), Vec3::ZERO, 60.0);
        let before = (camera.position - camera.target).normalize();

        camera.fit_to_bounds(&Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0)));

        let after = (camera.position - camera.target).normalize();
        assert!(before.abs_diff_eq(after, 1e-5));
    }

    #[test]
    fn test_fit_with_coincident_position_and_target() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::ZERO, 45.0);
        camera.fit_to_bounds(&Aabb::new(Vec3::ZERO, Vec3::splat(2.0)));
        assert!(camera.distance() > 0.0);
    }

    proptest! {
        #[test]
        fn prop_set_fov_stores_value(fov in -360.0f32..360.0) {
            let mut camera = Camera::default();
            camera.set_fov(fov);
            prop_assert_eq!(camera.fov, fov);
        }
    }
}
