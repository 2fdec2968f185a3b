//! Starfield layers: the main scattered field, three parallax depth
//! layers, and the sparse bright luminaries with their glow halo.

use crate::color::hsl_to_rgb;
use crate::constants::{
    STARFIELD_SPAN_X, STARFIELD_SPAN_Y, STARFIELD_SPIN_RATE, STARFIELD_Z_DEPTH, STARFIELD_Z_NEAR,
    TWINKLE_AMPLITUDE, TWINKLE_BASE_OPACITY, TWINKLE_RATE,
};
use crate::points::PointCloud;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// The main scattered field with per-star twinkle parameters.
#[derive(Clone, Debug)]
pub struct Starfield {
    pub cloud: PointCloud,
    pub twinkle_phase: Vec<f32>,
    pub twinkle_speed: Vec<f32>,
    time: f32,
}

impl Starfield {
    pub fn generate(count: usize, rng: &mut StdRng) -> Self {
        let mut cloud = PointCloud::with_capacity(count);
        cloud.spin_rate = STARFIELD_SPIN_RATE;
        cloud.opacity = TWINKLE_BASE_OPACITY;
        let mut twinkle_phase = Vec::with_capacity(count);
        let mut twinkle_speed = Vec::with_capacity(count);

        for _ in 0..count {
            let x = (rng.gen::<f32>() - 0.5) * STARFIELD_SPAN_X;
            let y = (rng.gen::<f32>() - 0.5) * STARFIELD_SPAN_Y;
            let z = STARFIELD_Z_NEAR - rng.gen::<f32>() * STARFIELD_Z_DEPTH;

            twinkle_phase.push(rng.gen::<f32>() * TAU);
            twinkle_speed.push(0.5 + rng.gen::<f32>() * 2.0);

            // Size tiers: a handful of bright stars, some medium, mostly small
            let size_rand = rng.gen::<f32>();
            let size = if size_rand > 0.995 {
                0.4 + rng.gen::<f32>() * 0.4
            } else if size_rand > 0.95 {
                0.2 + rng.gen::<f32>() * 0.2
            } else {
                0.05 + rng.gen::<f32>() * 0.1
            };

            let color_rand = rng.gen::<f32>();
            let color = if color_rand < 0.5 {
                hsl_to_rgb(0.15, 0.02 + rng.gen::<f32>() * 0.05, 0.85 + rng.gen::<f32>() * 0.1)
            } else if color_rand < 0.75 {
                hsl_to_rgb(
                    0.12 + rng.gen::<f32>() * 0.03,
                    0.1 + rng.gen::<f32>() * 0.15,
                    0.8 + rng.gen::<f32>() * 0.15,
                )
            } else if color_rand < 0.9 {
                hsl_to_rgb(
                    0.6 + rng.gen::<f32>() * 0.05,
                    0.15 + rng.gen::<f32>() * 0.1,
                    0.8 + rng.gen::<f32>() * 0.15,
                )
            } else {
                hsl_to_rgb(
                    0.08 + rng.gen::<f32>() * 0.04,
                    0.3 + rng.gen::<f32>() * 0.2,
                    0.7 + rng.gen::<f32>() * 0.15,
                )
            };

            cloud.push(Vec3::new(x, y, z), color, size);
        }

        Self {
            cloud,
            twinkle_phase,
            twinkle_speed,
            time: 0.0,
        }
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.time += dt_sec;
        self.cloud.advance(dt_sec);
        self.cloud.opacity =
            TWINKLE_BASE_OPACITY + (self.time * TWINKLE_RATE).sin() * TWINKLE_AMPLITUDE;
    }
}

/// One parallax depth layer; deeper layers drift slower.
pub fn star_layer(
    count: usize,
    depth: f32,
    spin_rate: f32,
    size: f32,
    opacity: f32,
    rng: &mut StdRng,
) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(count);
    cloud.spin_rate = spin_rate;
    cloud.opacity = opacity;
    for _ in 0..count {
        let pos = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 400.0,
            (rng.gen::<f32>() - 0.5) * 250.0,
            depth + (rng.gen::<f32>() - 0.5) * 50.0,
        );
        let color = hsl_to_rgb(
            0.12 + rng.gen::<f32>() * 0.08,
            0.05 + rng.gen::<f32>() * 0.1,
            0.8 + rng.gen::<f32>() * 0.15,
        );
        cloud.push(pos, color, size);
    }
    cloud
}

/// Sparse luminaries: a sharp core cloud and a wide, dim glow cloud that
/// share positions. Their opacities pulse on offset sinusoids.
#[derive(Clone, Debug)]
pub struct BrightStars {
    pub core: PointCloud,
    pub halo: PointCloud,
    time: f32,
}

impl BrightStars {
    pub fn generate(count: usize, rng: &mut StdRng) -> Self {
        let mut core = PointCloud::with_capacity(count);
        let mut halo = PointCloud::with_capacity(count);
        core.glow = 0.6;
        halo.opacity = 0.15;
        for _ in 0..count {
            let pos = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 250.0,
                (rng.gen::<f32>() - 0.5) * 150.0,
                -50.0 - rng.gen::<f32>() * 200.0,
            );
            let hue = if rng.gen::<f32>() > 0.7 { 0.6 } else { 0.12 };
            core.push(pos, hsl_to_rgb(hue, 0.1 + rng.gen::<f32>() * 0.1, 0.95), 0.5);
            halo.push(pos, hsl_to_rgb(hue, 0.15, 0.7), 2.0);
        }
        Self {
            core,
            halo,
            time: 0.0,
        }
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.time += dt_sec;
        self.core.opacity = 0.9 + (self.time * 2.0).sin() * 0.1;
        self.halo.opacity = 0.15 + (self.time * 1.5).sin() * 0.05;
    }
}
