use glam::Vec2;
use web_sys as web;

/// Shared per-frame input state, written by the event listeners and read
/// by the frame loop. The camera rig receives a copy each frame.
#[derive(Default, Clone, Copy)]
pub struct InputState {
    pub scroll_px: f32,
    /// Pointer in normalized device coordinates (-1..1, +y up).
    pub pointer_ndc: Vec2,
    /// Pointer in CSS pixels, for positioning the info card.
    pub pointer_css: Vec2,
    /// False until the first pointer/touch event; hover picking waits.
    pub pointer_active: bool,
}

/// Normalize client coordinates against the viewport, -1..1 with +y up.
#[inline]
pub fn client_to_ndc(window: &web::Window, client_x: f32, client_y: f32) -> Vec2 {
    let (w, h) = crate::dom::viewport_size(window);
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / w) * 2.0 - 1.0,
        -((client_y / h) * 2.0 - 1.0),
    )
}

#[inline]
pub fn window_scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}
