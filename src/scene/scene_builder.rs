//! SceneBuilder - declarative construction of the playground world
//!
//! The world is built once at startup and never restructured: a ground
//! slab, a staircase of static platforms, the dynamic actor and the
//! moving platform.

use bounce2d_physics::{BodyHandle, BoxFixture, PhysicsConfig, PhysicsWorld};
use glam::Vec2;

/// Rendering-side mirror of one static platform
///
/// The physics engine holds the authoritative geometry; one descriptor
/// is recorded per static platform, in creation order, read-only after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticObstacle {
    pub half_extents: Vec2,
    pub position: Vec2,
}

/// The built world: physics plus the handles and descriptors the
/// simulation and renderer work with.
pub struct GameScene {
    pub physics: PhysicsWorld,
    /// The dynamic box driven by keyboard forces
    pub actor: BodyHandle,
    /// The kinematic platform sweeping across the scene
    pub platform: BodyHandle,
    pub obstacles: Vec<StaticObstacle>,
}

/// Builder for the playground scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(PhysicsConfig::default())
///     .add_ground()
///     .add_obstacle_course()
///     .add_actor(Vec2::new(-0.1, 0.0))
///     .add_moving_platform(Vec2::new(0.0, 2.0), Vec2::new(-10.0, 0.0))
///     .build();
/// ```
pub struct SceneBuilder {
    physics: PhysicsWorld,
    obstacles: Vec<StaticObstacle>,
    actor: Option<BodyHandle>,
    platform: Option<BodyHandle>,
}

const GROUND_POSITION: Vec2 = Vec2::new(0.0, -20.0);
const GROUND_HALF_EXTENTS: Vec2 = Vec2::new(40.0, 1.0);
const OBSTACLE_HALF_EXTENTS: Vec2 = Vec2::new(5.0, 0.5);
const ACTOR_HALF_EXTENTS: Vec2 = Vec2::new(1.0, 1.0);
const PLATFORM_HALF_EXTENTS: Vec2 = Vec2::new(5.0, 1.0);
const ACTOR_LINEAR_DAMPING: f32 = 0.2;
const ACTOR_ANGULAR_DAMPING: f32 = 0.3;

impl SceneBuilder {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            physics: PhysicsWorld::with_config(config),
            obstacles: Vec::new(),
            actor: None,
            platform: None,
        }
    }

    /// Add the ground slab spanning the whole play area
    pub fn add_ground(mut self) -> Self {
        self.physics
            .add_fixed_box(GROUND_POSITION, GROUND_HALF_EXTENTS, BoxFixture::STATIC);
        self
    }

    /// Add the sixteen-platform staircase
    ///
    /// Two runs of eight: the first walks up toward the center of the
    /// scene and back down past it, the second climbs steadily from the
    /// left edge.
    pub fn add_obstacle_course(mut self) -> Self {
        let mut x = -30.0;
        let mut y = -20.0;
        for _ in 0..8 {
            self.add_obstacle(Vec2::new(x, y));
            x += 8.0;
            if x > 0.0 {
                y -= 3.8;
            } else {
                y += 3.8;
            }
        }

        x = -30.0;
        for _ in 0..8 {
            self.add_obstacle(Vec2::new(x, y));
            x += 8.0;
            y += 3.8;
        }

        self
    }

    fn add_obstacle(&mut self, position: Vec2) {
        self.physics
            .add_fixed_box(position, OBSTACLE_HALF_EXTENTS, BoxFixture::STATIC);
        self.obstacles.push(StaticObstacle {
            half_extents: OBSTACLE_HALF_EXTENTS,
            position,
        });
    }

    /// Add the dynamic actor at the given start position
    pub fn add_actor(mut self, position: Vec2) -> Self {
        let handle = self.physics.add_dynamic_box(
            position,
            ACTOR_HALF_EXTENTS,
            BoxFixture::BOUNCY,
            ACTOR_LINEAR_DAMPING,
            ACTOR_ANGULAR_DAMPING,
        );
        self.actor = Some(handle);
        self
    }

    /// Add the kinematic platform with its sweep velocity
    pub fn add_moving_platform(mut self, position: Vec2, velocity: Vec2) -> Self {
        let handle = self.physics.add_kinematic_box(
            position,
            PLATFORM_HALF_EXTENTS,
            BoxFixture::BOUNCY,
            velocity,
        );
        self.platform = Some(handle);
        self
    }

    /// Build the scene
    ///
    /// Panics when the actor or platform is missing; an incomplete scene
    /// is a startup bug, not a runtime condition.
    pub fn build(self) -> GameScene {
        GameScene {
            physics: self.physics,
            actor: self.actor.expect("scene requires an actor"),
            platform: self.platform.expect("scene requires a moving platform"),
            obstacles: self.obstacles,
        }
    }
}

/// Build the standard playground scene from a physics config
pub fn standard_scene(config: PhysicsConfig) -> GameScene {
    SceneBuilder::new(config)
        .add_ground()
        .add_obstacle_course()
        .add_actor(Vec2::new(-0.1, 0.0))
        .add_moving_platform(Vec2::new(0.0, 2.0), Vec2::new(-10.0, 0.0))
        .build()
}
