//! Input handling module
//!
//! Maps one-shot key presses to semantic actions. Held movement keys
//! are tracked separately in `bounce2d_input::HeldKeys`.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
