//! The solar system: planet catalog, orbital state, Saturn's ring, the
//! faint orbit guide lines, and the facts table behind the hover card.

use crate::constants::SOLAR_CENTER;
use crate::points::{PointCloud, PointInstance};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub color: [f32; 3],
    pub radius: f32,
    pub distance: f32,
    pub orbit_speed: f32,
}

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_COLOR: [f32; 3] = [1.0, 0.867, 0.667]; // #ffddaa
pub const SUN_GLOW_COLOR: [f32; 3] = [1.0, 0.667, 0.0]; // #ffaa00

pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "Mercury", color: [0.647, 0.647, 0.647], radius: 0.4, distance: 10.0, orbit_speed: 4.7 },
    PlanetSpec { name: "Venus", color: [0.890, 0.733, 0.463], radius: 0.9, distance: 15.0, orbit_speed: 3.5 },
    PlanetSpec { name: "Earth", color: [0.133, 0.200, 1.0], radius: 1.0, distance: 22.0, orbit_speed: 3.0 },
    PlanetSpec { name: "Mars", color: [0.867, 0.267, 0.133], radius: 0.5, distance: 28.0, orbit_speed: 2.4 },
    PlanetSpec { name: "Jupiter", color: [0.851, 0.686, 0.549], radius: 3.0, distance: 40.0, orbit_speed: 1.3 },
    PlanetSpec { name: "Saturn", color: [0.894, 0.835, 0.714], radius: 2.5, distance: 55.0, orbit_speed: 0.9 },
    PlanetSpec { name: "Uranus", color: [0.600, 0.867, 1.0], radius: 1.8, distance: 70.0, orbit_speed: 0.6 },
    PlanetSpec { name: "Neptune", color: [0.200, 0.333, 1.0], radius: 1.8, distance: 85.0, orbit_speed: 0.5 },
];

const ORBIT_SPEED_SCALE: f32 = 0.1;
const SPIN_RATE: f32 = 0.5;
const SATURN_INDEX: usize = 5;
const ORBIT_LINE_SEGMENTS: usize = 128;
const RING_POINTS: usize = 220;

#[derive(Clone, Copy, Debug)]
pub struct PlanetFacts {
    pub distance_from_sun: &'static str,
    pub diameter: &'static str,
    pub day_length: &'static str,
    pub fact: &'static str,
}

pub type PlanetFactsMap = FnvHashMap<&'static str, PlanetFacts>;

/// Facts backing the hover info card, keyed by body name.
pub fn planet_facts() -> PlanetFactsMap {
    let mut facts = FnvHashMap::default();
    facts.insert("Mercury", PlanetFacts {
        distance_from_sun: "57.9 million km",
        diameter: "4,879 km",
        day_length: "59 Earth days",
        fact: "The smallest planet in our solar system and closest to the Sun.",
    });
    facts.insert("Venus", PlanetFacts {
        distance_from_sun: "108.2 million km",
        diameter: "12,104 km",
        day_length: "243 Earth days",
        fact: "Venus spins backwards compared to most planets.",
    });
    facts.insert("Earth", PlanetFacts {
        distance_from_sun: "149.6 million km",
        diameter: "12,742 km",
        day_length: "24 hours",
        fact: "The only planet known to harbor life.",
    });
    facts.insert("Mars", PlanetFacts {
        distance_from_sun: "227.9 million km",
        diameter: "6,779 km",
        day_length: "24.6 hours",
        fact: "Home to the tallest mountain in the solar system, Olympus Mons.",
    });
    facts.insert("Jupiter", PlanetFacts {
        distance_from_sun: "778.5 million km",
        diameter: "139,820 km",
        day_length: "10 hours",
        fact: "The Great Red Spot is a storm that has raged for over 400 years.",
    });
    facts.insert("Saturn", PlanetFacts {
        distance_from_sun: "1.4 billion km",
        diameter: "116,460 km",
        day_length: "10.7 hours",
        fact: "Saturn could float in water because it is mostly gas.",
    });
    facts.insert("Uranus", PlanetFacts {
        distance_from_sun: "2.9 billion km",
        diameter: "50,724 km",
        day_length: "17 hours",
        fact: "Uranus rotates on its side, like a rolling ball.",
    });
    facts.insert("Neptune", PlanetFacts {
        distance_from_sun: "4.5 billion km",
        diameter: "49,244 km",
        day_length: "16 hours",
        fact: "Neptune has the strongest winds in the solar system.",
    });
    facts.insert(SUN_NAME, PlanetFacts {
        distance_from_sun: "0 km (center)",
        diameter: "1,392,684 km",
        day_length: "25 Earth days",
        fact: "The Sun contains 99.86% of the mass in our solar system.",
    });
    facts
}

/// Orbital state: one orbit angle and one spin angle per planet, advanced
/// independently so each body combines orbit and self-rotation.
#[derive(Clone, Debug)]
pub struct SolarSystem {
    pub center: Vec3,
    pub orbit_angle: [f32; 8],
    pub spin_angle: [f32; 8],
    /// Saturn's ring annulus, in ring-local space (y up).
    ring: Vec<Vec3>,
    /// Static faint guide circles, one per orbit.
    orbit_lines: PointCloud,
}

impl SolarSystem {
    pub fn new(rng: &mut StdRng) -> Self {
        let center = Vec3::from(SOLAR_CENTER);

        let saturn = &PLANETS[SATURN_INDEX];
        let ring_inner = saturn.radius * 1.4;
        let ring_outer = saturn.radius * 2.2;
        let ring = (0..RING_POINTS)
            .map(|_| {
                let angle = rng.gen::<f32>() * TAU;
                let radius = ring_inner + rng.gen::<f32>() * (ring_outer - ring_inner);
                Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
            })
            .collect();

        let mut orbit_lines =
            PointCloud::with_capacity(PLANETS.len() * ORBIT_LINE_SEGMENTS);
        orbit_lines.center = center;
        orbit_lines.opacity = 0.1;
        for planet in &PLANETS {
            for seg in 0..ORBIT_LINE_SEGMENTS {
                let angle = seg as f32 / ORBIT_LINE_SEGMENTS as f32 * TAU;
                orbit_lines.push(
                    center + Vec3::new(angle.cos() * planet.distance, 0.0, angle.sin() * planet.distance),
                    Vec3::ONE,
                    0.12,
                );
            }
        }

        // Stagger starting phases so the planets do not line up
        let mut orbit_angle = [0.0f32; 8];
        for a in orbit_angle.iter_mut() {
            *a = rng.gen::<f32>() * TAU;
        }

        Self {
            center,
            orbit_angle,
            spin_angle: [0.0; 8],
            ring,
            orbit_lines,
        }
    }

    pub fn step(&mut self, dt_sec: f32) {
        for (i, planet) in PLANETS.iter().enumerate() {
            self.orbit_angle[i] += dt_sec * planet.orbit_speed * ORBIT_SPEED_SCALE;
            self.spin_angle[i] += dt_sec * SPIN_RATE;
        }
    }

    pub fn body_position(&self, index: usize) -> Vec3 {
        let planet = &PLANETS[index];
        let angle = self.orbit_angle[index];
        self.center + Vec3::new(angle.cos() * planet.distance, 0.0, angle.sin() * planet.distance)
    }

    pub fn append_instances(&self, out: &mut Vec<PointInstance>) {
        // Sun core and glow shell
        out.push(PointInstance {
            pos: self.center.to_array(),
            scale: SUN_RADIUS * 2.0,
            color: [SUN_COLOR[0], SUN_COLOR[1], SUN_COLOR[2], 1.0],
            glow: 1.0,
        });
        out.push(PointInstance {
            pos: self.center.to_array(),
            scale: SUN_RADIUS * 2.4,
            color: [SUN_GLOW_COLOR[0], SUN_GLOW_COLOR[1], SUN_GLOW_COLOR[2], 0.3],
            glow: 0.5,
        });

        self.orbit_lines.append_instances(out);

        for (i, planet) in PLANETS.iter().enumerate() {
            let pos = self.body_position(i);
            out.push(PointInstance {
                pos: pos.to_array(),
                scale: planet.radius * 2.0,
                color: [planet.color[0], planet.color[1], planet.color[2], 1.0],
                glow: 0.0,
            });
            if i == SATURN_INDEX {
                for offset in &self.ring {
                    out.push(PointInstance {
                        pos: (pos + *offset).to_array(),
                        scale: 0.18,
                        color: [0.8, 0.733, 0.667, 0.8], // #ccbbaa
                        glow: 0.0,
                    });
                }
            }
        }
    }

    pub fn instance_count(&self) -> usize {
        2 + self.orbit_lines.len() + PLANETS.len() + self.ring.len()
    }
}
