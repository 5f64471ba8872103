use glam::Vec3;
use rapier3d::control::{EffectiveCharacterMovement, KinematicCharacterController};
use rapier3d::prelude::*;

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    const TICK_RATE: Real = 1.0 / 60.0;

    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = Self::TICK_RATE;

        Self {
            pipeline: PhysicsPipeline::new(),
            integration_parameters,
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(0.0, -9.81, 0.0),
        }
    }

    /// Advances the pipeline one tick. All character motion is kinematic;
    /// stepping keeps the broad phase current for shape casts.
    pub fn step(&mut self) {
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    pub fn add_ground(&mut self, y: Real, half_size: Real) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_size, 0.1, half_size)
            .translation(Vector::new(0.0, y, 0.0))
            .build();
        self.colliders.insert(collider)
    }

    pub fn add_static_box(&mut self, position: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(Vector::new(position.x, position.y, position.z))
            .build();
        self.colliders.insert(collider)
    }

    pub fn add_character_body(&mut self, position: Vec3) -> RigidBodyHandle {
        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(Vector::new(position.x, position.y, position.z))
            .lock_rotations()
            .build();
        self.bodies.insert(body)
    }

    pub fn attach_cylinder(
        &mut self,
        parent: RigidBodyHandle,
        half_height: Real,
        center_y: Real,
        radius: Real,
        enabled: bool,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cylinder(half_height, radius)
            .translation(Vector::new(0.0, center_y, 0.0))
            .friction(0.0)
            .enabled(enabled)
            .build();
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    pub fn set_collider_enabled(&mut self, handle: ColliderHandle, enabled: bool) {
        if let Some(collider) = self.colliders.get_mut(handle) {
            collider.set_enabled(enabled);
        }
    }

    pub fn collider_enabled(&self, handle: ColliderHandle) -> bool {
        self.colliders
            .get(handle)
            .map(|c| c.is_enabled())
            .unwrap_or(false)
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| {
            let t = b.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    pub fn set_body_position(&mut self, handle: RigidBodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            let current_rot = *body.rotation();
            let new_pose =
                Pose::from_parts(Vector::new(position.x, position.y, position.z), current_rot);
            body.set_position(new_pose, true);
        }
    }

    pub fn move_character(
        &self,
        controller: &KinematicCharacterController,
        handle: RigidBodyHandle,
        shape: &SharedShape,
        position: Pose,
        desired_translation: Vector,
    ) -> EffectiveCharacterMovement {
        let filter = QueryFilter::default().exclude_rigid_body(handle);
        let query_pipeline = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        );

        controller.move_shape(
            self.integration_parameters.dt,
            &query_pipeline,
            shape.as_ref(),
            &position,
            desired_translation,
            |_collision| {},
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collider_toggle_round_trips() {
        let mut world = PhysicsWorld::new();
        let body = world.add_character_body(Vec3::new(0.0, 1.0, 0.0));
        let collider = world.attach_cylinder(body, 0.9, 0.0, 0.3, true);

        assert!(world.collider_enabled(collider));
        world.set_collider_enabled(collider, false);
        assert!(!world.collider_enabled(collider));
    }

    #[test]
    fn body_position_round_trips() {
        let mut world = PhysicsWorld::new();
        let body = world.add_character_body(Vec3::ZERO);

        world.set_body_position(body, Vec3::new(1.0, 2.0, 3.0));
        let pos = world.body_position(body).unwrap();
        assert!(pos.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }
}
