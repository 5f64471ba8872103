use glam::Vec3;

use crate::physics::PhysicsWorld;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaObject {
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl ArenaObject {
    pub fn new(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            half_extents,
        }
    }
}

/// Static test geometry for demos and integration tests.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    objects: Vec<ArenaObject>,
}

impl Arena {
    const GROUND_SIZE: f32 = 100.0;

    /// Flat ground, a short platform run, and a low slab to crouch under.
    pub fn testing_ground() -> Self {
        let mut objects = Vec::new();

        objects.push(ArenaObject::new(
            Vec3::ZERO,
            Vec3::new(Self::GROUND_SIZE / 2.0, 0.1, Self::GROUND_SIZE / 2.0),
        ));

        Self::add_platforms(&mut objects);
        Self::add_crouch_slab(&mut objects);

        Self { objects }
    }

    fn add_platforms(objects: &mut Vec<ArenaObject>) {
        objects.push(ArenaObject::new(
            Vec3::new(5.0, 0.35, 0.0),
            Vec3::new(1.0, 0.25, 1.0),
        ));
        objects.push(ArenaObject::new(
            Vec3::new(8.0, 0.6, 0.0),
            Vec3::new(1.0, 0.5, 1.0),
        ));
        objects.push(ArenaObject::new(
            Vec3::new(11.0, 1.1, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ));
    }

    fn add_crouch_slab(objects: &mut Vec<ArenaObject>) {
        // Clearance of 1.2m over the ground top: standing headroom is 1.8.
        objects.push(ArenaObject::new(
            Vec3::new(-6.0, 1.35, 0.0),
            Vec3::new(2.0, 0.05, 2.0),
        ));
    }

    pub fn objects(&self) -> &[ArenaObject] {
        &self.objects
    }

    pub fn apply(&self, world: &mut PhysicsWorld) {
        for object in &self.objects {
            world.add_static_box(object.position, object.half_extents);
        }
    }
}
