use glam::{Quat, Vec3};

/// Pose capability for the body and camera, injected into the controller.
/// The body holds a world pose; the camera holds its pose local to the body.
pub trait Transform {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);

    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Incremental rotation around world up.
    fn rotate_y(&mut self, radians: f32) {
        self.set_rotation(Quat::from_rotation_y(radians) * self.rotation());
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl WorldTransform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Transform for WorldTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_faces_negative_z() {
        let transform = WorldTransform::default();
        assert!(transform.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(transform.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn rotate_y_quarter_turn_swings_forward_to_side() {
        let mut transform = WorldTransform::default();
        transform.rotate_y(-FRAC_PI_2);
        assert!(transform.forward().abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn yaw_increments_accumulate() {
        let mut transform = WorldTransform::default();
        for _ in 0..4 {
            transform.rotate_y(FRAC_PI_2);
        }
        assert!(transform.forward().abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }
}
