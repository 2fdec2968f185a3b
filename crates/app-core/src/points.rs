//! Point-cloud buffers shared by every generated layer.
//!
//! A `PointCloud` holds parallel position/color/size buffers, fixed length
//! at creation, plus the slow spin every layer carries. Each animator owns
//! its cloud exclusively; nothing else aliases the buffers.

use glam::{Quat, Vec3};

/// Per-sprite data uploaded to the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
}

/// Uniforms consumed by `shaders/scene.wgsl` on both front-ends.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    pub fog: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    /// Pivot the spin rotates around (world space).
    pub center: Vec3,
    pub spin_axis: Vec3,
    pub spin_angle: f32,
    pub spin_rate: f32,
    pub opacity: f32,
    pub glow: f32,
}

impl PointCloud {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
            center: Vec3::ZERO,
            spin_axis: Vec3::Y,
            spin_angle: 0.0,
            spin_rate: 0.0,
            opacity: 1.0,
            glow: 0.0,
        }
    }

    pub fn push(&mut self, position: Vec3, color: Vec3, size: f32) {
        self.positions.push(position);
        self.colors.push(color);
        self.sizes.push(size);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advance the slow drift rotation.
    pub fn advance(&mut self, dt_sec: f32) {
        self.spin_angle += self.spin_rate * dt_sec;
    }

    /// Append draw instances, applying the current spin about `center`.
    pub fn append_instances(&self, out: &mut Vec<PointInstance>) {
        let rot = Quat::from_axis_angle(self.spin_axis.normalize_or_zero(), self.spin_angle);
        for i in 0..self.positions.len() {
            let world = self.center + rot * (self.positions[i] - self.center);
            out.push(PointInstance {
                pos: world.to_array(),
                scale: self.sizes[i],
                color: [
                    self.colors[i].x,
                    self.colors[i].y,
                    self.colors[i].z,
                    self.opacity,
                ],
                glow: self.glow,
            });
        }
    }
}
