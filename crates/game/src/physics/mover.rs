use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

use crate::mover::Mover;
use crate::player::PlayerConfig;

use super::PhysicsWorld;

const BLOCKED_EPSILON: f32 = 1e-4;

/// Rapier-backed mover. The body origin sits at the center of the standing
/// cylinder; the crouching collider is offset downward so both shapes share
/// the same feet level.
pub struct CharacterMover {
    world: PhysicsWorld,
    body: RigidBodyHandle,
    standing_collider: ColliderHandle,
    crouching_collider: ColliderHandle,
    controller: KinematicCharacterController,
    radius: f32,
    stand_height: f32,
    crouch_height: f32,
    crouched: bool,
    grounded: bool,
    hit_above: bool,
    slope_limit: f32,
}

impl CharacterMover {
    pub fn spawn(mut world: PhysicsWorld, position: Vec3, config: &PlayerConfig) -> Self {
        let body = world.add_character_body(position);
        let standing_collider =
            world.attach_cylinder(body, config.stand_height / 2.0, 0.0, config.radius, true);
        let crouch_center = -(config.stand_height - config.crouch_height) / 2.0;
        let crouching_collider = world.attach_cylinder(
            body,
            config.crouch_height / 2.0,
            crouch_center,
            config.radius,
            false,
        );

        let mut controller = KinematicCharacterController::default();
        controller.offset = CharacterLength::Absolute(0.02);
        controller.up = Vector::Y;
        controller.max_slope_climb_angle = config.slope_limit_normal.to_radians();
        controller.min_slope_slide_angle = 35_f32.to_radians();
        controller.snap_to_ground = Some(CharacterLength::Absolute(0.2));
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(0.35),
            min_width: CharacterLength::Absolute(0.15),
            include_dynamic_bodies: false,
        });

        Self {
            world,
            body,
            standing_collider,
            crouching_collider,
            controller,
            radius: config.radius,
            stand_height: config.stand_height,
            crouch_height: config.crouch_height,
            crouched: false,
            grounded: false,
            hit_above: false,
            slope_limit: config.slope_limit_normal,
        }
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn step(&mut self) {
        self.world.step();
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    fn active_shape(&self) -> (SharedShape, f32) {
        if self.crouched {
            let center = -(self.stand_height - self.crouch_height) / 2.0;
            (
                SharedShape::cylinder(self.crouch_height / 2.0, self.radius),
                center,
            )
        } else {
            (SharedShape::cylinder(self.stand_height / 2.0, self.radius), 0.0)
        }
    }
}

impl Mover for CharacterMover {
    fn grounded(&self) -> bool {
        self.grounded
    }

    fn hit_above(&self) -> bool {
        self.hit_above
    }

    fn move_by(&mut self, delta: Vec3) {
        let Some(position) = self.world.body_position(self.body) else {
            return;
        };

        let (shape, center_y) = self.active_shape();
        let shape_pose = Pose::from_parts(
            Vector::new(position.x, position.y + center_y, position.z),
            Rotation::IDENTITY,
        );

        // Ground snapping only applies to a grounded character moving down;
        // snapping an airborne or ascending sweep would glue jumps to the
        // floor.
        let mut controller = self.controller.clone();
        if !self.grounded || delta.y > BLOCKED_EPSILON {
            controller.snap_to_ground = None;
        }

        let corrected = self.world.move_character(
            &controller,
            self.body,
            &shape,
            shape_pose,
            Vector::new(delta.x, delta.y, delta.z),
        );

        let applied = Vec3::new(
            corrected.translation.x,
            corrected.translation.y,
            corrected.translation.z,
        );
        self.world.set_body_position(self.body, position + applied);

        self.grounded = corrected.grounded;
        self.hit_above = delta.y > BLOCKED_EPSILON && applied.y < delta.y * 0.5;
    }

    fn slope_limit(&self) -> f32 {
        self.slope_limit
    }

    fn set_slope_limit(&mut self, degrees: f32) {
        self.slope_limit = degrees;
        self.controller.max_slope_climb_angle = degrees.to_radians();
    }

    fn set_crouched(&mut self, crouched: bool) {
        if self.crouched == crouched {
            return;
        }
        self.crouched = crouched;
        self.world
            .set_collider_enabled(self.standing_collider, !crouched);
        self.world
            .set_collider_enabled(self.crouching_collider, crouched);
        log::debug!("collider swap: crouched={}", crouched);
    }

    fn position(&self) -> Vec3 {
        self.world.body_position(self.body).unwrap_or(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_on_ground() -> CharacterMover {
        let mut world = PhysicsWorld::new();
        world.add_ground(0.0, 50.0);
        CharacterMover::spawn(world, Vec3::new(0.0, 1.2, 0.0), &PlayerConfig::default())
    }

    #[test]
    fn spawn_enables_only_standing_collider() {
        let mover = spawn_on_ground();
        assert!(mover.world().collider_enabled(mover.standing_collider));
        assert!(!mover.world().collider_enabled(mover.crouching_collider));
    }

    #[test]
    fn crouch_swaps_active_collider() {
        let mut mover = spawn_on_ground();

        mover.set_crouched(true);
        assert!(!mover.world().collider_enabled(mover.standing_collider));
        assert!(mover.world().collider_enabled(mover.crouching_collider));

        mover.set_crouched(false);
        assert!(mover.world().collider_enabled(mover.standing_collider));
        assert!(!mover.world().collider_enabled(mover.crouching_collider));
    }

    #[test]
    fn slope_limit_round_trips_in_degrees() {
        let mut mover = spawn_on_ground();
        assert_eq!(mover.slope_limit(), 45.0);

        mover.set_slope_limit(90.0);
        assert_eq!(mover.slope_limit(), 90.0);
        assert!((mover.controller.max_slope_climb_angle - 90_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn falling_move_lands_on_ground() {
        let mut mover = spawn_on_ground();
        mover.step();

        for _ in 0..60 {
            mover.move_by(Vec3::new(0.0, -0.1, 0.0));
            mover.step();
        }

        assert!(mover.grounded());
        // Feet come to rest on the ground top, center half a height up.
        assert!(mover.position().y > 0.8);
    }
}
