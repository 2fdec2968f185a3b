//! Camera types shared with the front-ends.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The front-ends
//! feed scroll and pointer state in explicitly each frame; nothing else
//! reads or writes the rig.

use crate::constants::{
    CAMERA_BASE_Y, CAMERA_BASE_Z, CAMERA_FOVY, CAMERA_PULL_BACK, CAMERA_RISE, CAMERA_SMOOTH_RATE,
    CAMERA_ZFAR, CAMERA_ZNEAR, POINTER_LOOK_DROP, POINTER_LOOK_SPAN, SCROLL_FACTOR_PER_PX,
    SOLAR_CENTER,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Scroll- and pointer-reactive rig: panoramic ascension on scroll,
/// parallax look on pointer, exponential smoothing toward both targets.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    scroll_px: f32,
    pointer: Vec2,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_BASE_Y, CAMERA_BASE_Z),
            scroll_px: 0.0,
            pointer: Vec2::ZERO,
        }
    }

    pub fn set_scroll(&mut self, px: f32) {
        self.scroll_px = px.max(0.0);
    }

    /// Pointer in normalized device coordinates (-1..1, +y up).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    pub fn scroll_factor(&self) -> f32 {
        (self.scroll_px * SCROLL_FACTOR_PER_PX).min(1.0)
    }

    /// Move the eye toward the scroll-derived target. The exponential form
    /// converges identically at any frame rate.
    pub fn step(&mut self, dt_sec: f32) {
        let f = self.scroll_factor();
        let target_y = CAMERA_BASE_Y + CAMERA_RISE * f;
        let target_z = CAMERA_BASE_Z + CAMERA_PULL_BACK * f;
        let alpha = 1.0 - (-dt_sec * CAMERA_SMOOTH_RATE).exp();
        self.eye.y += (target_y - self.eye.y) * alpha;
        self.eye.z += (target_z - self.eye.z) * alpha;
    }

    /// Look toward the solar-system center, swayed by the pointer and
    /// biased downward as the camera rises.
    pub fn look_target(&self) -> Vec3 {
        let f = self.scroll_factor();
        Vec3::from(SOLAR_CENTER)
            + Vec3::new(
                self.pointer.x * POINTER_LOOK_SPAN,
                self.pointer.y * POINTER_LOOK_SPAN - f * POINTER_LOOK_DROP,
                0.0,
            )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: self.look_target(),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let cam = self.camera(aspect);
        cam.projection_matrix() * cam.view_matrix()
    }

    /// Camera-frame right and up axes in world space, for billboarding.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.look_target() - self.eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// Compute a world-space ray from normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_ray(&self, aspect: f32, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj(aspect).inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p0: Vec3 = p_near.truncate() / p_near.w;
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (p0, (p1 - p0).normalize())
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
