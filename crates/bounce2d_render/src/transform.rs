//! Pose -> model matrix

use glam::{Mat4, Quat, Vec3};

/// Build a model transform from a body pose and render size
///
/// Applies scale, then rotation about the view axis (z), then
/// translation. Pure function; called fresh for every drawn entity.
pub fn compute_model_transform(scale: Vec3, rotation_degrees: f32, position: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        scale,
        Quat::from_rotation_z(rotation_degrees.to_radians()),
        position,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_identity_pose() {
        let m = compute_model_transform(Vec3::ONE, 0.0, Vec3::ZERO);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_scale_then_translate() {
        let m = compute_model_transform(Vec3::new(2.0, 4.0, 1.0), 0.0, Vec3::new(3.0, -1.0, 0.0));
        // Unit-cube corner (0.5, 0.5, 0) scales to (1, 2, 0), then moves
        let p = m * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!((p.x - 4.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_about_view_axis() {
        let m = compute_model_transform(Vec3::ONE, 90.0, Vec3::ZERO);
        // x axis rotates onto y
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_applies_before_translation() {
        let m = compute_model_transform(Vec3::ONE, 180.0, Vec3::new(5.0, 0.0, 0.0));
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        // Rotated to (-1, 0, 0), then translated to (4, 0, 0)
        assert!((p.x - 4.0).abs() < 1e-4);
    }
}
