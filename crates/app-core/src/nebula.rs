//! Nebulae and deep-sky dressing: faint wisps, warm glowing clusters,
//! spiral dust lanes, and the distant/companion galaxies.

use crate::color::hsl_to_rgb;
use crate::constants::SOLAR_CENTER;
use crate::points::PointCloud;
use glam::{Mat3, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Three fixed wisp anchors; points scatter in anisotropic boxes around
/// them so each wisp keeps a distinct tint.
const WISP_CENTERS: [(Vec3, f32, f32); 3] = [
    (Vec3::new(80.0, 30.0, -180.0), 0.6, 0.3),   // blue
    (Vec3::new(-60.0, -20.0, -200.0), 0.8, 0.2), // purple
    (Vec3::new(-100.0, 50.0, -220.0), 0.55, 0.25), // teal
];

pub fn nebula_wisps(count: usize, rng: &mut StdRng) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(count);
    cloud.spin_rate = 0.0003;
    cloud.opacity = 0.08;
    let spread = 40.0;
    for i in 0..count {
        let (center, hue, sat) = WISP_CENTERS[i % WISP_CENTERS.len()];
        let pos = center
            + Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread * 0.5,
                (rng.gen::<f32>() - 0.5) * spread * 0.3,
            );
        let color = hsl_to_rgb(
            hue + (rng.gen::<f32>() - 0.5) * 0.1,
            sat,
            0.3 + rng.gen::<f32>() * 0.2,
        );
        cloud.push(pos, color, 3.0);
    }
    cloud
}

/// Small scattered glowing clusters with warm hues.
pub fn nebula_clusters(count: usize, rng: &mut StdRng) -> PointCloud {
    let cluster_count = 25;
    let clusters: Vec<(Vec3, f32)> = (0..cluster_count)
        .map(|_| {
            (
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 180.0,
                    (rng.gen::<f32>() - 0.5) * 80.0,
                    -30.0 - rng.gen::<f32>() * 130.0,
                ),
                rng.gen::<f32>() * 0.15,
            )
        })
        .collect();

    let mut cloud = PointCloud::with_capacity(count);
    cloud.spin_rate = 0.002;
    cloud.opacity = 0.5;
    for _ in 0..count {
        let (center, hue) = clusters[rng.gen_range(0..clusters.len())];
        let r = rng.gen::<f32>().powf(0.6) * 8.0;
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let pos = center
            + Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin() * 0.6,
                r * phi.cos(),
            );
        let color = hsl_to_rgb(
            hue + (rng.gen::<f32>() - 0.5) * 0.05,
            0.4 + rng.gen::<f32>() * 0.3,
            0.6 + rng.gen::<f32>() * 0.3,
        );
        cloud.push(pos, color, 0.3);
    }
    cloud
}

/// Two spiral dust arms tilted out of the ecliptic, hugging the solar
/// system center. Warm core, dusty rim.
pub fn galaxy_dust(count: usize, rng: &mut StdRng) -> PointCloud {
    let center = Vec3::from(SOLAR_CENTER);
    let tilt = Mat3::from_rotation_z(0.2) * Mat3::from_rotation_x(0.4);

    let mut cloud = PointCloud::with_capacity(count);
    cloud.center = center;
    cloud.spin_rate = 0.008;
    cloud.opacity = 0.5;
    for i in 0..count {
        let arm = (i % 2) as f32;
        let arm_angle = arm * PI + (rng.gen::<f32>() - 0.5) * 0.2;
        let radius = 10.0 + rng.gen::<f32>().powf(0.6) * 60.0;
        let spiral_angle = radius * 0.08;
        let angle = arm_angle + spiral_angle + (rng.gen::<f32>() - 0.5) * 0.3;

        let flat = Vec3::new(
            radius * angle.cos(),
            (rng.gen::<f32>() - 0.5) * 0.5,
            radius * angle.sin(),
        );
        let pos = center + tilt * flat;

        let dist_ratio = radius / 70.0;
        let color = if dist_ratio < 0.4 {
            hsl_to_rgb(0.1 + rng.gen::<f32>() * 0.05, 0.6, 0.6 + rng.gen::<f32>() * 0.2)
        } else {
            hsl_to_rgb(0.08 + rng.gen::<f32>() * 0.08, 0.4, 0.4 + rng.gen::<f32>() * 0.3)
        };
        cloud.push(pos, color, 0.3);
    }
    cloud
}

/// One small blurry elliptical disc far behind the scene, Hubble-deep-field
/// style. Elongated in x, flattened in y, brighter toward the core.
pub fn distant_galaxy(rng: &mut StdRng) -> PointCloud {
    let center = Vec3::new(
        (rng.gen::<f32>() - 0.5) * 200.0,
        (rng.gen::<f32>() - 0.5) * 120.0,
        -150.0 - rng.gen::<f32>() * 150.0,
    );
    let yaw = rng.gen::<f32>() * PI;
    let scale = 0.8 + rng.gen::<f32>() * 1.5;
    let star_count = 200 + rng.gen_range(0..300);
    let hue = rng.gen::<f32>() * 0.15;
    let orient = Mat3::from_rotation_x(0.3) * Mat3::from_rotation_y(yaw);

    let mut cloud = PointCloud::with_capacity(star_count);
    cloud.center = center;
    // spin about the disc normal, not the world axis
    cloud.spin_axis = orient * Vec3::Z;
    cloud.spin_rate = 0.002;
    cloud.opacity = 0.5;
    let max_r = 5.0 * scale;
    for _ in 0..star_count {
        let r = rng.gen::<f32>().sqrt() * max_r;
        let theta = rng.gen::<f32>() * TAU;
        let local = Vec3::new(
            r * theta.cos() * 1.5,
            r * theta.sin() * 0.4,
            (rng.gen::<f32>() - 0.5) * 0.5,
        );
        let brightness = 0.4 + (1.0 - r / max_r) * 0.5;
        let color = hsl_to_rgb(hue + (rng.gen::<f32>() - 0.5) * 0.05, 0.3, brightness);
        cloud.push(center + orient * local, color, 0.1);
    }
    cloud
}

/// Companion elliptical galaxy: a slightly flattened sphere of old
/// yellowish stars at a fixed offset. Static (no drift).
pub fn companion_galaxy(star_count: usize, rng: &mut StdRng) -> PointCloud {
    let center = Vec3::new(-40.0, -25.0, -70.0);
    let size = 8.0;

    let mut cloud = PointCloud::with_capacity(star_count);
    cloud.center = center;
    cloud.opacity = 0.8;
    for _ in 0..star_count {
        let r = rng.gen::<f32>().sqrt() * size;
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let pos = center
            + Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin() * 0.7,
                r * phi.cos(),
            );
        let brightness = 0.6 + (1.0 - r / size) * 0.3 + rng.gen::<f32>() * 0.1;
        let color = hsl_to_rgb(
            0.12 + rng.gen::<f32>() * 0.05,
            0.3 + rng.gen::<f32>() * 0.2,
            brightness,
        );
        cloud.push(pos, color, 0.15);
    }
    cloud
}
