//! Fixed-timestep simulation tick
//!
//! Invoked once per timer expiry, open loop: every tick advances the
//! physics world by exactly one fixed step no matter how much wall-clock
//! time passed. There is deliberately no accumulator or interpolation;
//! changing that would change simulation determinism.

use bounce2d_input::{movement_force, ForceTuning, HeldKeys};
use bounce2d_physics::{BodyHandle, PhysicsWorld};
use glam::Vec2;

use crate::scene::GameScene;

/// Tunable constants for the tick
#[derive(Debug, Clone, Copy)]
pub struct SimulationTuning {
    pub forces: ForceTuning,
    /// Beyond +/- this x the body's velocity is reversed
    pub boundary_x: f32,
}

impl Default for SimulationTuning {
    fn default() -> Self {
        Self {
            forces: ForceTuning::default(),
            boundary_x: 39.0,
        }
    }
}

/// Runs one simulation tick: step, input force, boundary bounce
pub struct SimulationSystem {
    tuning: SimulationTuning,
}

impl SimulationSystem {
    pub fn new(tuning: SimulationTuning) -> Self {
        Self { tuning }
    }

    /// Advance the scene by one tick
    ///
    /// Order matters: the world steps first, then the held keys are
    /// resolved into a force that the NEXT step consumes, then the
    /// boundary rule runs on the actor and the platform. The caller
    /// requests a redraw afterwards.
    pub fn tick(&self, scene: &mut GameScene, held: &HeldKeys) {
        scene.physics.step();

        let force = movement_force(held, &self.tuning.forces);
        scene.physics.apply_force(scene.actor, force);

        Self::boundary_bounce(&mut scene.physics, scene.actor, self.tuning.boundary_x);
        Self::boundary_bounce(&mut scene.physics, scene.platform, self.tuning.boundary_x);
    }

    /// Elastic world-boundary bounce
    ///
    /// Past the boundary the full velocity (both components) is negated;
    /// the position is not clamped, so a body may sit outside the
    /// boundary for a tick before the reversed velocity brings it back.
    /// The positive edge is exclusive: exactly +boundary does not
    /// reverse, exactly -boundary does.
    fn boundary_bounce(physics: &mut PhysicsWorld, body: BodyHandle, boundary_x: f32) {
        let x = physics.position(body).x;
        if x <= -boundary_x || x > boundary_x {
            let v = physics.linvel(body);
            physics.set_linvel(body, -v);
        }
    }

    /// Reset the actor to the origin at rest
    ///
    /// Position (0,0), orientation 0, linear velocity zero. Angular
    /// velocity and damping are left untouched.
    pub fn reset_actor(&self, scene: &mut GameScene) {
        scene.physics.set_pose(scene.actor, Vec2::ZERO, 0.0);
        scene.physics.set_linvel(scene.actor, Vec2::ZERO);
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(SimulationTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce2d_input::MoveKey;
    use bounce2d_physics::{BoxFixture, PhysicsConfig};

    fn free_body_world() -> (PhysicsWorld, BodyHandle) {
        let mut physics = PhysicsWorld::with_config(PhysicsConfig::new(Vec2::ZERO, 1.0 / 60.0));
        let body = physics.add_dynamic_box(
            Vec2::ZERO,
            Vec2::new(1.0, 1.0),
            BoxFixture::BOUNCY,
            0.0,
            0.0,
        );
        (physics, body)
    }

    #[test]
    fn test_bounce_past_positive_boundary() {
        let (mut physics, body) = free_body_world();
        physics.set_pose(body, Vec2::new(40.0, 0.0), 0.0);
        physics.set_linvel(body, Vec2::new(5.0, 3.0));

        SimulationSystem::boundary_bounce(&mut physics, body, 39.0);

        assert_eq!(physics.linvel(body), Vec2::new(-5.0, -3.0));
    }

    #[test]
    fn test_exactly_positive_boundary_does_not_bounce() {
        let (mut physics, body) = free_body_world();
        physics.set_pose(body, Vec2::new(39.0, 0.0), 0.0);
        physics.set_linvel(body, Vec2::new(5.0, 3.0));

        SimulationSystem::boundary_bounce(&mut physics, body, 39.0);

        assert_eq!(physics.linvel(body), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_exactly_negative_boundary_bounces() {
        let (mut physics, body) = free_body_world();
        physics.set_pose(body, Vec2::new(-39.0, 0.0), 0.0);
        physics.set_linvel(body, Vec2::new(-2.0, 1.0));

        SimulationSystem::boundary_bounce(&mut physics, body, 39.0);

        assert_eq!(physics.linvel(body), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_inside_boundary_untouched() {
        let (mut physics, body) = free_body_world();
        physics.set_pose(body, Vec2::new(0.0, 0.0), 0.0);
        physics.set_linvel(body, Vec2::new(-7.0, 4.0));

        SimulationSystem::boundary_bounce(&mut physics, body, 39.0);

        assert_eq!(physics.linvel(body), Vec2::new(-7.0, 4.0));
    }

    #[test]
    fn test_tick_records_force_from_held_right_key() {
        let mut scene = crate::scene::standard_scene(PhysicsConfig::default());
        let sim = SimulationSystem::default();

        let mut held = HeldKeys::new();
        held.press(MoveKey::Right);
        sim.tick(&mut scene, &held);

        assert_eq!(
            scene.physics.applied_force(scene.actor),
            Vec2::new(100.0, 0.0)
        );
    }

    #[test]
    fn test_tick_with_no_keys_applies_zero_force() {
        let mut scene = crate::scene::standard_scene(PhysicsConfig::default());
        let sim = SimulationSystem::default();

        sim.tick(&mut scene, &HeldKeys::new());

        assert_eq!(scene.physics.applied_force(scene.actor), Vec2::ZERO);
    }

    #[test]
    fn test_reset_actor() {
        let mut scene = crate::scene::standard_scene(PhysicsConfig::default());
        let sim = SimulationSystem::default();

        let mut held = HeldKeys::new();
        held.press(MoveKey::Right);
        held.press(MoveKey::Jump);
        for _ in 0..120 {
            sim.tick(&mut scene, &held);
        }

        sim.reset_actor(&mut scene);

        assert_eq!(scene.physics.position(scene.actor), Vec2::ZERO);
        assert_eq!(scene.physics.rotation(scene.actor), 0.0);
        assert_eq!(scene.physics.linvel(scene.actor), Vec2::ZERO);
    }
}
