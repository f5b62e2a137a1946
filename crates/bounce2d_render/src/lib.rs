//! Cube rendering for Bounce2D
//!
//! This crate draws every body in the playground as a scaled, rotated,
//! flat-colored unit cube under an orthographic camera.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrthoCamera`] - fixed orthographic view of the play area
//! - [`pipeline::CubePipeline`] - instanced unit-cube pipeline with diffuse lighting
//! - [`transform::compute_model_transform`] - pure pose -> model matrix helper

pub mod camera;
pub mod context;
pub mod cube;
pub mod pipeline;
pub mod transform;

pub use camera::OrthoCamera;
pub use context::RenderContext;
pub use pipeline::{CubeInstance, CubePipeline, FrameUniforms};
pub use transform::compute_model_transform;
