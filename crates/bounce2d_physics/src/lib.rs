//! 2D rigid-body physics for Bounce2D
//!
//! This crate is a thin facade over [rapier2d]. It exposes exactly the
//! operations the playground needs:
//! - world creation with a gravity vector and a fixed timestep
//! - box-shaped body spawning (fixed, dynamic, kinematic)
//! - fixed-dt stepping with the engine's default solver configuration
//! - per-body pose/velocity access and continuous force application
//!
//! Collision detection, constraint solving and integration are entirely
//! rapier's job; nothing in here re-implements them.

pub mod body;
pub mod world;

pub use body::{BodyHandle, BoxFixture};
pub use world::{PhysicsConfig, PhysicsWorld};
