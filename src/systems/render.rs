//! GPU rendering system
//!
//! Draws the scene each frame: clear, then floor, static obstacles,
//! moving platform, actor - in that order, each as one flat-colored
//! cube instance.

use std::sync::Arc;
use winit::window::Window;

use bounce2d_render::{
    compute_model_transform, CubeInstance, CubePipeline, FrameUniforms, OrthoCamera, RenderContext,
};
use glam::Vec3;

use crate::config::RenderingConfig;
use crate::scene::GameScene;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

const FLOOR_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const OBSTACLE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const PLATFORM_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const ACTOR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Every slab is rendered this thick along the view axis
const SLAB_DEPTH: f32 = 0.1;
/// The floor never moves; its pose is not queried from physics
const FLOOR_SCALE: Vec3 = Vec3::new(80.0, 2.0, SLAB_DEPTH);
const FLOOR_POSITION: Vec3 = Vec3::new(0.0, -20.0, 0.0);
const PLATFORM_SCALE: Vec3 = Vec3::new(10.0, 2.0, SLAB_DEPTH);
const ACTOR_SCALE: Vec3 = Vec3::new(2.0, 2.0, SLAB_DEPTH);

/// A minimized window reports a 0x0 inner size; surfaces and depth
/// textures cannot be configured at that size, so such resizes are
/// dropped and the previous dimensions stay in effect.
fn is_valid_surface_size(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

/// Build this frame's instance list in draw order
fn build_instances(scene: &GameScene) -> Vec<CubeInstance> {
    let mut instances = Vec::with_capacity(scene.obstacles.len() + 3);

    instances.push(CubeInstance {
        model: compute_model_transform(FLOOR_SCALE, 0.0, FLOOR_POSITION),
        color: FLOOR_COLOR,
    });

    for obstacle in &scene.obstacles {
        let size = obstacle.half_extents * 2.0;
        instances.push(CubeInstance {
            model: compute_model_transform(
                Vec3::new(size.x, size.y, SLAB_DEPTH),
                0.0,
                obstacle.position.extend(0.0),
            ),
            color: OBSTACLE_COLOR,
        });
    }

    // Pose queried fresh from the kinematic body
    let platform_pos = scene.physics.position(scene.platform);
    instances.push(CubeInstance {
        model: compute_model_transform(PLATFORM_SCALE, 0.0, platform_pos.extend(0.0)),
        color: PLATFORM_COLOR,
    });

    // Pose and rotation queried fresh from the dynamic body
    let actor_pos = scene.physics.position(scene.actor);
    let actor_angle = scene.physics.rotation(scene.actor).to_degrees();
    instances.push(CubeInstance {
        model: compute_model_transform(ACTOR_SCALE, actor_angle, actor_pos.extend(0.0)),
        color: ACTOR_COLOR,
    });

    instances
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: CubePipeline,
    camera: OrthoCamera,
    rendering: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        rendering: RenderingConfig,
        camera: OrthoCamera,
        vsync: bool,
    ) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));

        let mut pipeline = CubePipeline::new(
            &context.device,
            context.config.format,
            context.wireframe_supported,
        );
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        Self {
            context,
            pipeline,
            camera,
            rendering,
        }
    }

    /// Handle window resize
    ///
    /// Zero-sized resizes (window minimized) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !is_valid_surface_size(width, height) {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Reconfigure the surface after a lost-surface error
    pub fn recover_surface(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Switch wireframe rendering on or off
    ///
    /// Returns the mode actually in effect.
    pub fn set_wireframe(&mut self, enabled: bool) -> bool {
        self.pipeline.set_wireframe(enabled)
    }

    /// Render a single frame from the current body poses
    pub fn render_frame(&mut self, scene: &GameScene) -> Result<(), RenderError> {
        let uniforms = FrameUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            light_pos: [
                self.rendering.light_pos[0],
                self.rendering.light_pos[1],
                self.rendering.light_pos[2],
                0.0,
            ],
            light_color: self.rendering.light_color,
            ambient: [self.rendering.ambient_strength, 0.0, 0.0, 0.0],
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

        let instances = build_instances(scene);
        self.pipeline
            .upload_instances(&self.context.queue, &instances);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.rendering.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::standard_scene;
    use bounce2d_physics::PhysicsConfig;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_minimized_window_sizes_rejected() {
        assert!(!is_valid_surface_size(0, 0));
        assert!(!is_valid_surface_size(1280, 0));
        assert!(!is_valid_surface_size(0, 720));
        assert!(is_valid_surface_size(1280, 720));
        assert!(is_valid_surface_size(1, 1));
    }

    #[test]
    fn test_instance_order_and_colors() {
        let scene = standard_scene(PhysicsConfig::default());
        let instances = build_instances(&scene);

        // floor + 16 obstacles + platform + actor
        assert_eq!(instances.len(), 19);
        assert_eq!(instances[0].color, FLOOR_COLOR);
        assert_eq!(instances[1].color, OBSTACLE_COLOR);
        assert_eq!(instances[17].color, PLATFORM_COLOR);
        assert_eq!(instances[18].color, ACTOR_COLOR);
    }

    #[test]
    fn test_obstacle_instances_use_descriptor_poses() {
        let scene = standard_scene(PhysicsConfig::default());
        let instances = build_instances(&scene);

        // First obstacle sits at (-30, -20) with full size 10x1
        let translation = instances[1].model.w_axis;
        assert_eq!(translation.x, -30.0);
        assert_eq!(translation.y, -20.0);
        let x_scale = instances[1].model.x_axis.length();
        assert!((x_scale - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_actor_instance_tracks_physics_pose() {
        let scene = standard_scene(PhysicsConfig::default());
        let instances = build_instances(&scene);

        let translation = instances[18].model.w_axis;
        assert!((translation.x - (-0.1)).abs() < 1e-5);
        assert_eq!(translation.y, 0.0);
    }
}
