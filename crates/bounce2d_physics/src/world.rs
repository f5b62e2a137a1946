//! Physics world facade
//!
//! Owns the rapier simulation structures and steps them by a fixed
//! timestep. Every call to [`PhysicsWorld::step`] advances the world by
//! exactly the configured dt, independent of wall-clock time; callers
//! that want a different cadence change the tick timer, not the dt.

use crate::body::{BodyHandle, BoxFixture};
use glam::Vec2;
use rapier2d::prelude::*;

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity vector (negative y = down)
    pub gravity: Vec2,
    /// Fixed timestep in seconds for every step
    pub timestep: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -20.0),
            timestep: 1.0 / 60.0,
        }
    }
}

impl PhysicsConfig {
    pub fn new(gravity: Vec2, timestep: f32) -> Self {
        Self { gravity, timestep }
    }
}

/// The physics world containing all rigid bodies
///
/// Bodies are spawned once during scene construction and live for the
/// whole run, so the accessors index directly: a [`BodyHandle`] returned
/// by a spawn method is valid for the lifetime of the world.
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    ///
    /// Solver iteration counts stay at rapier's recommended defaults;
    /// only the timestep is taken from the config.
    pub fn with_config(config: PhysicsConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.timestep;

        log::debug!(
            "Physics world: gravity {:?}, dt {}",
            config.gravity,
            config.timestep
        );

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: vector![config.gravity.x, config.gravity.y],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Spawn an immovable box (ground, platforms)
    pub fn add_fixed_box(
        &mut self,
        position: Vec2,
        half_extents: Vec2,
        fixture: BoxFixture,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![position.x, position.y])
            .build();
        self.attach_box(body, half_extents, fixture)
    }

    /// Spawn a fully simulated box with the given damping factors
    pub fn add_dynamic_box(
        &mut self,
        position: Vec2,
        half_extents: Vec2,
        fixture: BoxFixture,
        linear_damping: f32,
        angular_damping: f32,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .linear_damping(linear_damping)
            .angular_damping(angular_damping)
            .build();
        self.attach_box(body, half_extents, fixture)
    }

    /// Spawn a velocity-driven box that ignores forces and gravity
    ///
    /// Rotation is locked; the platform translates only.
    pub fn add_kinematic_box(
        &mut self,
        position: Vec2,
        half_extents: Vec2,
        fixture: BoxFixture,
        velocity: Vec2,
    ) -> BodyHandle {
        let body = RigidBodyBuilder::kinematic_velocity_based()
            .translation(vector![position.x, position.y])
            .lock_rotations()
            .linvel(vector![velocity.x, velocity.y])
            .build();
        self.attach_box(body, half_extents, fixture)
    }

    fn attach_box(
        &mut self,
        body: RigidBody,
        half_extents: Vec2,
        fixture: BoxFixture,
    ) -> BodyHandle {
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .density(fixture.density)
            .friction(fixture.friction)
            .restitution(fixture.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Advance the simulation by exactly one fixed timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// The fixed timestep this world advances by per step
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Current position of a body
    pub fn position(&self, handle: BodyHandle) -> Vec2 {
        let t = self.bodies[handle].translation();
        Vec2::new(t.x, t.y)
    }

    /// Current orientation of a body, radians
    pub fn rotation(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle].rotation().angle()
    }

    /// Current linear velocity of a body
    pub fn linvel(&self, handle: BodyHandle) -> Vec2 {
        let v = self.bodies[handle].linvel();
        Vec2::new(v.x, v.y)
    }

    /// Set the linear velocity of a body, waking it
    pub fn set_linvel(&mut self, handle: BodyHandle, velocity: Vec2) {
        self.bodies[handle].set_linvel(vector![velocity.x, velocity.y], true);
    }

    /// Apply a continuous force at the body's center of mass
    ///
    /// Replaces any force applied earlier this tick; consumed by the next
    /// step. This is the engine's force semantics, not an impulse.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        let body = &mut self.bodies[handle];
        body.reset_forces(true);
        body.add_force(vector![force.x, force.y], true);
    }

    /// The force currently queued on a body for the next step
    pub fn applied_force(&self, handle: BodyHandle) -> Vec2 {
        let f = self.bodies[handle].user_force();
        Vec2::new(f.x, f.y)
    }

    /// Teleport a body to a new pose, waking it
    ///
    /// Velocities are left alone; callers that want a full reset also
    /// call [`Self::set_linvel`].
    pub fn set_pose(&mut self, handle: BodyHandle, position: Vec2, angle: f32) {
        self.bodies[handle].set_position(Isometry::new(vector![position.x, position.y], angle), true);
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
