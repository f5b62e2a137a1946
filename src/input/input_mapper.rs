//! Input mapping from raw events to semantic actions
//!
//! Movement keys (arrows, Space) are NOT mapped here - they feed the
//! held-key set directly. This mapper handles one-shot keys only.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by one-shot keys (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application (Escape)
    Exit,
    /// Put the actor back at the origin, at rest (R key)
    ResetActor,
    /// Switch to fullscreen (F key)
    Fullscreen,
    /// Switch back to windowed mode (N key)
    Windowed,
    /// Render as wireframe (W key)
    WireframeOn,
    /// Render solid (S key)
    WireframeOff,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for one-shot keys, `None` otherwise.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetActor),
            KeyCode::KeyF => Some(InputAction::Fullscreen),
            KeyCode::KeyN => Some(InputAction::Windowed),
            KeyCode::KeyW => Some(InputAction::WireframeOn),
            KeyCode::KeyS => Some(InputAction::WireframeOff),
            _ => None, // Movement keys handled by HeldKeys
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_movement_keys_not_mapped() {
        for key in [KeyCode::ArrowLeft, KeyCode::ArrowRight, KeyCode::Space] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_one_shot_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ResetActor)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::Fullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyN, ElementState::Pressed),
            Some(InputAction::Windowed)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyW, ElementState::Pressed),
            Some(InputAction::WireframeOn)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyS, ElementState::Pressed),
            Some(InputAction::WireframeOff)
        );
    }
}
