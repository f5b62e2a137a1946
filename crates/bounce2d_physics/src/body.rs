//! Body spawn parameters

use rapier2d::prelude::RigidBodyHandle;

/// Opaque handle to a body in a [`crate::PhysicsWorld`].
///
/// Handles stay valid for the whole run; bodies are created once at
/// startup and never removed.
pub type BodyHandle = RigidBodyHandle;

/// Shape material for a box collider: density, friction, restitution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxFixture {
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl BoxFixture {
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density,
            friction,
            restitution,
        }
    }

    /// Zero-density fixture for fixed bodies (platforms, ground).
    pub const STATIC: BoxFixture = BoxFixture {
        density: 0.0,
        friction: 0.3,
        restitution: 0.0,
    };

    /// The bouncy fixture shared by the actor and the moving platform.
    pub const BOUNCY: BoxFixture = BoxFixture {
        density: 1.5,
        friction: 0.3,
        restitution: 0.4,
    };
}
