//! Asteroid belt: a rocky annulus ringing the solar system between the
//! Mars and Jupiter orbits.

use crate::color::hsl_to_rgb;
use crate::constants::{BELT_SPIN_RATE, SOLAR_CENTER};
use crate::points::PointCloud;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

pub fn asteroid_belt(count: usize, inner: f32, outer: f32, rng: &mut StdRng) -> PointCloud {
    let center = Vec3::from(SOLAR_CENTER);
    let mut cloud = PointCloud::with_capacity(count);
    cloud.center = center;
    cloud.spin_rate = BELT_SPIN_RATE;
    cloud.opacity = 0.8;
    for _ in 0..count {
        let angle = rng.gen::<f32>() * TAU;
        let radius = inner + rng.gen::<f32>() * (outer - inner);
        let irregularity = (rng.gen::<f32>() - 0.5) * 2.0;
        let pos = center
            + Vec3::new(
                angle.cos() * (radius + irregularity),
                (rng.gen::<f32>() - 0.5) * 3.0,
                angle.sin() * (radius + irregularity),
            );
        let color = hsl_to_rgb(
            0.08 + rng.gen::<f32>() * 0.04,
            0.1 + rng.gen::<f32>() * 0.2,
            0.3 + rng.gen::<f32>() * 0.3,
        );
        cloud.push(pos, color, 0.05 + rng.gen::<f32>() * 0.15);
    }
    cloud
}
