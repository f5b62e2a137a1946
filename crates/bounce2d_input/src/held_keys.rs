//! The set of currently held movement keys
//!
//! Press inserts, release removes; the simulation only reads. The input
//! layer delivers well-paired press/release events, so the set never
//! contains a key that is not physically held.

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Movement-relevant keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    /// ArrowLeft - push the actor in -x
    Left,
    /// ArrowRight - push the actor in +x
    Right,
    /// Space - push the actor in +y
    Jump,
}

impl MoveKey {
    /// Map a raw key code to a movement key, if it is one
    pub fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft => Some(MoveKey::Left),
            KeyCode::ArrowRight => Some(MoveKey::Right),
            KeyCode::Space => Some(MoveKey::Jump),
            _ => None,
        }
    }
}

/// Set of movement keys currently held down
#[derive(Debug, Default)]
pub struct HeldKeys {
    keys: HashSet<MoveKey>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: MoveKey) {
        self.keys.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: MoveKey) {
        self.keys.remove(&key);
    }

    /// Whether a key is currently held
    pub fn is_held(&self, key: MoveKey) -> bool {
        self.keys.contains(&key)
    }

    /// Whether no movement key is held
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over held keys (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = MoveKey> + '_ {
        self.keys.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release_leaves_empty() {
        let mut held = HeldKeys::new();
        held.press(MoveKey::Left);
        assert!(held.is_held(MoveKey::Left));
        held.release(MoveKey::Left);
        assert!(held.is_empty());
    }

    #[test]
    fn test_release_one_of_two_keeps_other() {
        let mut held = HeldKeys::new();
        held.press(MoveKey::Left);
        held.press(MoveKey::Jump);
        held.release(MoveKey::Left);
        assert!(!held.is_held(MoveKey::Left));
        assert!(held.is_held(MoveKey::Jump));
        assert!(!held.is_empty());
    }

    #[test]
    fn test_double_press_is_idempotent() {
        let mut held = HeldKeys::new();
        held.press(MoveKey::Right);
        held.press(MoveKey::Right);
        held.release(MoveKey::Right);
        assert!(held.is_empty());
    }

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(MoveKey::from_key_code(KeyCode::ArrowLeft), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_key_code(KeyCode::ArrowRight), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_key_code(KeyCode::Space), Some(MoveKey::Jump));
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyW), None);
        assert_eq!(MoveKey::from_key_code(KeyCode::Escape), None);
    }
}
