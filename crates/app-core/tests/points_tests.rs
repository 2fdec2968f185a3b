// Buffer invariants for every procedural generator: parallel buffers stay
// the same length, colors stay inside [0, 1], and generation is
// deterministic for a given seed.

use app_core::belt::asteroid_belt;
use app_core::color::hsl_to_rgb;
use app_core::nebula::{
    companion_galaxy, distant_galaxy, galaxy_dust, nebula_clusters, nebula_wisps,
};
use app_core::starfield::{star_layer, BrightStars, Starfield};
use app_core::PointCloud;
use rand::prelude::*;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn assert_cloud_invariants(cloud: &PointCloud, expected_len: Option<usize>) {
    assert_eq!(cloud.positions.len(), cloud.colors.len());
    assert_eq!(cloud.positions.len(), cloud.sizes.len());
    if let Some(n) = expected_len {
        assert_eq!(cloud.len(), n);
    }
    for c in &cloud.colors {
        for ch in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&ch), "color channel out of range: {ch}");
        }
    }
    for s in &cloud.sizes {
        assert!(*s > 0.0, "sprite size must be positive");
    }
}

#[test]
fn generators_keep_parallel_buffers_consistent() {
    for seed in [0, 1, 42, 0xDEAD_BEEF] {
        let sf = Starfield::generate(500, &mut rng(seed));
        assert_cloud_invariants(&sf.cloud, Some(500));
        assert_eq!(sf.twinkle_phase.len(), 500);
        assert_eq!(sf.twinkle_speed.len(), 500);

        assert_cloud_invariants(
            &star_layer(300, -200.0, 0.001, 0.1, 0.6, &mut rng(seed)),
            Some(300),
        );
        assert_cloud_invariants(&nebula_wisps(120, &mut rng(seed)), Some(120));
        assert_cloud_invariants(&nebula_clusters(250, &mut rng(seed)), Some(250));
        assert_cloud_invariants(&galaxy_dust(200, &mut rng(seed)), Some(200));
        assert_cloud_invariants(&companion_galaxy(400, &mut rng(seed)), Some(400));
        assert_cloud_invariants(&asteroid_belt(300, 38.0, 46.0, &mut rng(seed)), None);

        // Distant galaxies pick their own star count from an envelope
        let galaxy = distant_galaxy(&mut rng(seed));
        assert_cloud_invariants(&galaxy, None);
        assert!((200..500).contains(&galaxy.len()));
    }
}

#[test]
fn bright_stars_pair_core_and_halo() {
    let bright = BrightStars::generate(15, &mut rng(7));
    assert_eq!(bright.core.len(), 15);
    assert_eq!(bright.halo.len(), 15);
    for i in 0..15 {
        assert_eq!(bright.core.positions[i], bright.halo.positions[i]);
    }
}

#[test]
fn same_seed_reproduces_identical_clouds() {
    let a = Starfield::generate(1000, &mut rng(99));
    let b = Starfield::generate(1000, &mut rng(99));
    assert_eq!(a.cloud.positions, b.cloud.positions);
    assert_eq!(a.cloud.colors, b.cloud.colors);
    assert_eq!(a.cloud.sizes, b.cloud.sizes);

    let c = Starfield::generate(1000, &mut rng(100));
    assert_ne!(a.cloud.positions, c.cloud.positions);
}

#[test]
fn starfield_points_stay_inside_envelope() {
    let sf = Starfield::generate(2000, &mut rng(3));
    for p in &sf.cloud.positions {
        assert!(p.x.abs() <= 150.0);
        assert!(p.y.abs() <= 100.0);
        assert!(p.z <= -20.0 && p.z >= -270.0);
    }
}

#[test]
fn belt_points_respect_the_annulus() {
    let belt = asteroid_belt(500, 38.0, 46.0, &mut rng(11));
    let center = glam::Vec3::from(app_core::SOLAR_CENTER);
    for p in &belt.positions {
        let rel = *p - center;
        let radius = (rel.x * rel.x + rel.z * rel.z).sqrt();
        // one unit of radial irregularity on either side
        assert!(radius >= 37.0 - 1e-3 && radius <= 47.0 + 1e-3);
        assert!(rel.y.abs() <= 1.5 + 1e-3);
    }
}

#[test]
fn hsl_channels_clamp_for_any_input() {
    let mut r = rng(5);
    for _ in 0..2000 {
        let c = hsl_to_rgb(
            r.gen::<f32>() * 4.0 - 2.0,
            r.gen::<f32>() * 2.0,
            r.gen::<f32>() * 2.0 - 0.5,
        );
        for ch in [c.x, c.y, c.z] {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
    // gray when fully desaturated
    let gray = hsl_to_rgb(0.3, 0.0, 0.4);
    assert!((gray.x - 0.4).abs() < 1e-6);
    assert_eq!(gray.x, gray.y);
    assert_eq!(gray.y, gray.z);
}

#[test]
fn cloud_spin_preserves_distance_from_pivot() {
    let mut cloud = asteroid_belt(100, 38.0, 46.0, &mut rng(21));
    let center = cloud.center;
    let before: Vec<f32> = cloud
        .positions
        .iter()
        .map(|p| (*p - center).length())
        .collect();

    for _ in 0..120 {
        cloud.advance(1.0 / 60.0);
    }
    let mut instances = Vec::new();
    cloud.append_instances(&mut instances);
    for (inst, expected) in instances.iter().zip(before.iter()) {
        let rotated = glam::Vec3::from(inst.pos) - center;
        assert!((rotated.length() - expected).abs() < 1e-3);
    }
}
