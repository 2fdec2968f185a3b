//! Ray picking against the solar-system bodies for the hover info card.

use crate::solar::{SolarSystem, PLANETS, SUN_NAME, SUN_RADIUS};
use glam::Vec3;
use smallvec::SmallVec;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Test the ray against the sun and every planet; nearest hit wins.
pub fn pick_body(ray_origin: Vec3, ray_dir: Vec3, solar: &SolarSystem) -> Option<&'static str> {
    let mut hits: SmallVec<[(&'static str, f32); 9]> = SmallVec::new();
    if let Some(t) = ray_sphere(ray_origin, ray_dir, solar.center, SUN_RADIUS) {
        hits.push((SUN_NAME, t));
    }
    for (i, planet) in PLANETS.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, solar.body_position(i), planet.radius) {
            hits.push((planet.name, t));
        }
    }
    hits.iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| *name)
}
