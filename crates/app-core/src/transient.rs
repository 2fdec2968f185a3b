//! Transient events: the shooting-star pool and the long-period comet.
//!
//! Both follow the same life-cycle: inactive until a random activation,
//! active while integrating a trail, expired back to inactive with fresh
//! random parameters. No identity persists across resets besides the
//! buffer slot index.

use crate::constants::{
    COMET_MAX_DELAY_SEC, COMET_ORBIT_A, COMET_ORBIT_B, COMET_REST_SEC, COMET_SPEED,
    COMET_TIME_SCALE, COMET_TRAIL_LEN, SHOOTING_FLOOR_Y, SHOOTING_REARM_PROBABILITY,
    SHOOTING_SPEED_MULT, SHOOTING_TRAIL_LEN,
};
use crate::points::PointInstance;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct ShootingStar {
    pub position: Vec3,
    pub velocity: Vec3,
    pub age: f32,
    pub max_age: f32,
    pub size: f32,
    pub active: bool,
}

impl ShootingStar {
    fn spawn(rng: &mut StdRng) -> Self {
        let max_age = 2.0 + rng.gen::<f32>() * 2.0;
        // some of the pool starts mid-flight
        let active = rng.gen::<f32>() > 0.7;
        Self {
            position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 200.0,
                50.0 + rng.gen::<f32>() * 50.0,
                -150.0 + rng.gen::<f32>() * 100.0,
            ),
            velocity: Vec3::new(
                -2.0 - rng.gen::<f32>() * 3.0,
                -1.0 - rng.gen::<f32>() * 2.0,
                rng.gen::<f32>() * 0.5,
            ),
            age: if active { rng.gen::<f32>() * max_age } else { 0.0 },
            max_age,
            size: 0.3 + rng.gen::<f32>() * 0.4,
            active,
        }
    }

    fn rearm(&mut self, rng: &mut StdRng) {
        self.active = true;
        self.age = 0.0;
        self.position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 200.0,
            40.0 + rng.gen::<f32>() * 60.0,
            -100.0 + rng.gen::<f32>() * 50.0,
        );
        self.velocity = Vec3::new(
            -2.0 - rng.gen::<f32>() * 4.0,
            -1.0 - rng.gen::<f32>() * 2.0,
            rng.gen::<f32>() * 0.5,
        );
        self.max_age = 1.5 + rng.gen::<f32>() * 2.0;
        self.size = 0.3 + rng.gen::<f32>() * 0.5;
    }
}

/// Fixed pool of shooting stars, each dragging a 20-point trail ring.
#[derive(Clone, Debug)]
pub struct ShootingStarField {
    pub stars: Vec<ShootingStar>,
    /// Trail slots, `SHOOTING_TRAIL_LEN` per star, head first.
    trails: Vec<Vec3>,
    head_colors: Vec<Vec3>,
}

impl ShootingStarField {
    pub fn new(count: usize, rng: &mut StdRng) -> Self {
        let stars: Vec<ShootingStar> = (0..count).map(|_| ShootingStar::spawn(rng)).collect();
        let mut trails = Vec::with_capacity(count * SHOOTING_TRAIL_LEN);
        let mut head_colors = Vec::with_capacity(count);
        for star in &stars {
            trails.extend(std::iter::repeat(star.position).take(SHOOTING_TRAIL_LEN));
            head_colors.push(Vec3::new(
                0.9 + rng.gen::<f32>() * 0.1,
                0.95 + rng.gen::<f32>() * 0.05,
                1.0,
            ));
        }
        Self {
            stars,
            trails,
            head_colors,
        }
    }

    pub fn step(&mut self, dt_sec: f32, rng: &mut StdRng) {
        for (i, star) in self.stars.iter_mut().enumerate() {
            if star.active {
                star.age += dt_sec;
                star.position += star.velocity * (dt_sec * SHOOTING_SPEED_MULT);

                // Shift the trail toward the tail, head takes the new position
                let base = i * SHOOTING_TRAIL_LEN;
                for t in (1..SHOOTING_TRAIL_LEN).rev() {
                    self.trails[base + t] = self.trails[base + t - 1];
                }
                self.trails[base] = star.position;

                if star.age > star.max_age || star.position.y < SHOOTING_FLOOR_Y {
                    star.active = false;
                    star.age = 0.0;
                }
            } else if rng.gen::<f32>() < SHOOTING_REARM_PROBABILITY {
                star.rearm(rng);
                let base = i * SHOOTING_TRAIL_LEN;
                for t in 0..SHOOTING_TRAIL_LEN {
                    self.trails[base + t] = star.position;
                }
            }
        }
    }

    pub fn append_instances(&self, out: &mut Vec<PointInstance>) {
        for (i, star) in self.stars.iter().enumerate() {
            if !star.active {
                continue;
            }
            let life_ratio = (1.0 - star.age / star.max_age).max(0.0);
            let head = self.head_colors[i];
            out.push(PointInstance {
                pos: star.position.to_array(),
                scale: star.size * 1.5,
                color: [head.x, head.y, head.z, 1.0],
                glow: 0.8,
            });
            let base = i * SHOOTING_TRAIL_LEN;
            for t in 0..SHOOTING_TRAIL_LEN {
                let fade = (1.0 - t as f32 / SHOOTING_TRAIL_LEN as f32) * life_ratio;
                out.push(PointInstance {
                    pos: self.trails[base + t].to_array(),
                    scale: 0.4,
                    color: [0.9 * fade, 0.95 * fade, fade, 0.8],
                    glow: 0.0,
                });
            }
        }
    }

    pub fn instance_capacity(&self) -> usize {
        self.stars.len() * (1 + SHOOTING_TRAIL_LEN)
    }
}

/// One comet on an elliptical path, dragging a 50-point trail. It waits
/// out a random delay, completes an orbit, then re-arms with a new delay.
#[derive(Clone, Debug)]
pub struct Comet {
    trail: Vec<Vec3>,
    colors: Vec<Vec3>,
    time: f32,
    start_delay: f32,
}

impl Comet {
    pub fn new(rng: &mut StdRng) -> Self {
        let mut colors = Vec::with_capacity(COMET_TRAIL_LEN);
        for i in 0..COMET_TRAIL_LEN {
            let fade = 1.0 - i as f32 / COMET_TRAIL_LEN as f32;
            colors.push(crate::color::hsl_to_rgb(0.55, 0.5 * fade, 0.9 * fade));
        }
        Self {
            trail: vec![Vec3::ZERO; COMET_TRAIL_LEN],
            colors,
            time: rng.gen::<f32>() * 100.0,
            start_delay: rng.gen::<f32>() * 30.0,
        }
    }

    pub fn step(&mut self, dt_sec: f32, rng: &mut StdRng) {
        self.time += dt_sec;
        if self.time < self.start_delay {
            return;
        }
        let t = (self.time - self.start_delay) * COMET_TIME_SCALE;

        let head = Vec3::new(
            (t * COMET_SPEED).cos() * COMET_ORBIT_A,
            (t * COMET_SPEED * 0.3).sin() * 10.0,
            (t * COMET_SPEED).sin() * COMET_ORBIT_B - 50.0,
        );
        for i in (1..COMET_TRAIL_LEN).rev() {
            self.trail[i] = self.trail[i - 1];
        }
        self.trail[0] = head;

        if t > TAU / COMET_SPEED + COMET_REST_SEC {
            self.time = 0.0;
            self.start_delay = rng.gen::<f32>() * COMET_MAX_DELAY_SEC;
        }
    }

    pub fn is_flying(&self) -> bool {
        self.time >= self.start_delay
    }

    pub fn head(&self) -> Vec3 {
        self.trail[0]
    }

    pub fn append_instances(&self, out: &mut Vec<PointInstance>) {
        if !self.is_flying() {
            return;
        }
        for i in 0..COMET_TRAIL_LEN {
            let c = self.colors[i];
            out.push(PointInstance {
                pos: self.trail[i].to_array(),
                scale: 0.8,
                color: [c.x, c.y, c.z, 0.9],
                glow: if i == 0 { 0.6 } else { 0.0 },
            });
        }
    }

    pub fn instance_capacity(&self) -> usize {
        COMET_TRAIL_LEN
    }
}
