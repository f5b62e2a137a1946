//! Orthographic camera for the play area
//!
//! The view is fixed for the whole run: an orthographic volume spanning
//! the world boundary, seen from (0, 0, 1) toward the origin.

use glam::{Mat4, Vec3};

/// Fixed orthographic camera
#[derive(Debug, Clone, Copy)]
pub struct OrthoCamera {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            left: -40.0,
            right: 40.0,
            bottom: -20.0,
            top: 20.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl OrthoCamera {
    /// Combined view-projection matrix
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_origin_maps_to_center() {
        let vp = OrthoCamera::default().view_proj();
        let clip = vp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
    }

    #[test]
    fn test_boundary_maps_to_clip_edge() {
        let vp = OrthoCamera::default().view_proj();
        let clip = vp * Vec4::new(40.0, 20.0, 0.0, 1.0);
        assert!((clip.x - 1.0).abs() < 1e-5);
        assert!((clip.y - 1.0).abs() < 1e-5);
        let clip = vp * Vec4::new(-40.0, -20.0, 0.0, 1.0);
        assert!((clip.x + 1.0).abs() < 1e-5);
        assert!((clip.y + 1.0).abs() < 1e-5);
    }
}
