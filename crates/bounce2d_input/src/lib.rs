//! Keyboard input for Bounce2D
//!
//! Tracks the set of currently held movement keys and resolves them into
//! a force vector for the dynamic actor once per simulation tick.
//! Special one-shot keys (reset, fullscreen, exit) are the application's
//! business, not this crate's.

pub mod held_keys;
pub mod movement;

pub use held_keys::{HeldKeys, MoveKey};
pub use movement::{movement_force, ForceTuning};
