//! Application systems
//!
//! The tick/draw split: SimulationSystem advances the world on the
//! timer, RenderSystem draws it on redraw, WindowSystem owns the window.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationSystem, SimulationTuning};
pub use window::{WindowError, WindowSystem};
