// Orbital state and catalog sanity.

use app_core::{planet_facts, SolarSystem, PLANETS, SUN_NAME};
use rand::prelude::*;

fn system(seed: u64) -> SolarSystem {
    SolarSystem::new(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn catalog_lists_eight_planets_with_increasing_distances() {
    assert_eq!(PLANETS.len(), 8);
    let mut prev = 0.0;
    for planet in &PLANETS {
        assert!(planet.distance > prev, "{} out of order", planet.name);
        assert!(planet.radius > 0.0);
        assert!(planet.orbit_speed > 0.0);
        prev = planet.distance;
    }
    // inner planets orbit faster
    assert!(PLANETS[0].orbit_speed > PLANETS[7].orbit_speed);
}

#[test]
fn orbit_step_preserves_each_planets_radius() {
    let mut solar = system(42);
    let before: Vec<f32> = (0..PLANETS.len())
        .map(|i| (solar.body_position(i) - solar.center).length())
        .collect();
    for _ in 0..600 {
        solar.step(1.0 / 60.0);
    }
    for (i, planet) in PLANETS.iter().enumerate() {
        let radius = (solar.body_position(i) - solar.center).length();
        assert!((radius - before[i]).abs() < 1e-3);
        assert!((radius - planet.distance).abs() < 1e-3);
    }
}

#[test]
fn step_advances_orbit_and_spin() {
    let mut solar = system(1);
    let orbit0 = solar.orbit_angle;
    let spin0 = solar.spin_angle;
    solar.step(0.5);
    for i in 0..PLANETS.len() {
        assert!(solar.orbit_angle[i] > orbit0[i]);
        assert!(solar.spin_angle[i] > spin0[i]);
    }
    // Mercury sweeps more orbit than Neptune over the same interval
    let mercury_sweep = solar.orbit_angle[0] - orbit0[0];
    let neptune_sweep = solar.orbit_angle[7] - orbit0[7];
    assert!(mercury_sweep > neptune_sweep);
}

#[test]
fn facts_cover_every_body() {
    let facts = planet_facts();
    assert!(facts.contains_key(SUN_NAME));
    for planet in &PLANETS {
        let entry = facts
            .get(planet.name)
            .unwrap_or_else(|| panic!("missing facts for {}", planet.name));
        assert!(!entry.fact.is_empty());
        assert!(!entry.diameter.is_empty());
    }
}

#[test]
fn instance_count_matches_emitted_instances() {
    let solar = system(5);
    let mut out = Vec::new();
    solar.append_instances(&mut out);
    assert_eq!(out.len(), solar.instance_count());
}
