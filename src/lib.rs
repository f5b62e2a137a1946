//! Bounce2D - a windowed 2D rigid-body playground
//!
//! A dynamic box actor bounces around a staircase of static platforms
//! while a kinematic platform sweeps across the scene. Physics is
//! rapier2d's job, drawing is wgpu's; the code here wires scene setup,
//! a fixed-timestep tick, keyboard forces and per-body cube drawing
//! together.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
