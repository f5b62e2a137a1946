//! Scene construction utilities

mod scene_builder;

pub use scene_builder::{standard_scene, GameScene, SceneBuilder, StaticObstacle};
