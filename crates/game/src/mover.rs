use glam::Vec3;

/// Kinematic movement-with-collision capability, injected into the
/// controller. `grounded` and `hit_above` report on the most recent
/// `move_by`, so a reading taken before this tick's move reflects the
/// previous tick's contact state.
pub trait Mover {
    fn grounded(&self) -> bool;

    /// Whether the most recent move was blocked from directly above.
    fn hit_above(&self) -> bool;

    /// Sweep-and-resolve by a world-space delta.
    fn move_by(&mut self, delta: Vec3);

    /// Maximum walkable slope in degrees.
    fn slope_limit(&self) -> f32;
    fn set_slope_limit(&mut self, degrees: f32);

    /// Swap the active collision shape between standing and crouching.
    fn set_crouched(&mut self, crouched: bool);

    fn position(&self) -> Vec3;
}
