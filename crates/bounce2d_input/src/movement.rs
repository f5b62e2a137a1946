//! Held keys -> actor force resolution

use crate::held_keys::{HeldKeys, MoveKey};
use glam::Vec2;

/// Force magnitudes applied per movement key
#[derive(Debug, Clone, Copy)]
pub struct ForceTuning {
    /// Magnitude of the left/right push
    pub lateral: f32,
    /// Magnitude of the jump push
    pub jump: f32,
}

impl Default for ForceTuning {
    fn default() -> Self {
        Self {
            lateral: 100.0,
            jump: 400.0,
        }
    }
}

/// Resolve the held movement keys into a force vector
///
/// Each key OVERWRITES its axis rather than summing: holding left and
/// right yields one of the two lateral forces (whichever key is visited
/// last), never zero and never double. Nothing held yields zero force.
pub fn movement_force(held: &HeldKeys, tuning: &ForceTuning) -> Vec2 {
    let mut force = Vec2::ZERO;
    for key in held.iter() {
        match key {
            MoveKey::Left => force.x = -tuning.lateral,
            MoveKey::Right => force.x = tuning.lateral,
            MoveKey::Jump => force.y = tuning.jump,
        }
    }
    force
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_force() {
        let held = HeldKeys::new();
        assert_eq!(movement_force(&held, &ForceTuning::default()), Vec2::ZERO);
    }

    #[test]
    fn test_single_keys() {
        let tuning = ForceTuning::default();

        let mut held = HeldKeys::new();
        held.press(MoveKey::Left);
        assert_eq!(movement_force(&held, &tuning), Vec2::new(-100.0, 0.0));

        let mut held = HeldKeys::new();
        held.press(MoveKey::Right);
        assert_eq!(movement_force(&held, &tuning), Vec2::new(100.0, 0.0));

        let mut held = HeldKeys::new();
        held.press(MoveKey::Jump);
        assert_eq!(movement_force(&held, &tuning), Vec2::new(0.0, 400.0));
    }

    #[test]
    fn test_jump_combines_with_lateral_across_axes() {
        let mut held = HeldKeys::new();
        held.press(MoveKey::Right);
        held.press(MoveKey::Jump);
        let force = movement_force(&held, &ForceTuning::default());
        assert_eq!(force, Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_opposing_keys_overwrite_not_sum() {
        // Left and right held together resolve to one full-magnitude
        // lateral push, never zero (summation) and never double.
        let mut held = HeldKeys::new();
        held.press(MoveKey::Left);
        held.press(MoveKey::Right);
        let force = movement_force(&held, &ForceTuning::default());
        assert_eq!(force.x.abs(), 100.0);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_custom_tuning() {
        let tuning = ForceTuning { lateral: 50.0, jump: 80.0 };
        let mut held = HeldKeys::new();
        held.press(MoveKey::Left);
        held.press(MoveKey::Jump);
        assert_eq!(movement_force(&held, &tuning), Vec2::new(-50.0, 80.0));
    }
}
