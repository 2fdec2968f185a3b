//! Soft floating motes drifting near the viewer on slow trig paths.

use crate::points::PointInstance;
use glam::Vec3;
use rand::prelude::*;

const MOTE_COLOR: [f32; 3] = [0.667, 0.8, 1.0]; // #aaccff
const MOTE_ALPHA: f32 = 0.4;

#[derive(Clone, Copy, Debug)]
struct Mote {
    anchor: Vec3,
    t: f32,
    speed: f32,
}

#[derive(Clone, Debug)]
pub struct FloatingMotes {
    motes: Vec<Mote>,
}

impl FloatingMotes {
    pub fn new(count: usize, rng: &mut StdRng) -> Self {
        let motes = (0..count)
            .map(|_| Mote {
                anchor: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 150.0,
                    (rng.gen::<f32>() - 0.5) * 100.0,
                    -30.0 - rng.gen::<f32>() * 120.0,
                ),
                t: rng.gen::<f32>() * 100.0,
                // phase rate in radians per second
                speed: (0.005 + rng.gen::<f32>() * 0.015) * 60.0,
            })
            .collect();
        Self { motes }
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }

    pub fn step(&mut self, dt_sec: f32) {
        for mote in &mut self.motes {
            mote.t += mote.speed * dt_sec;
        }
    }

    pub fn append_instances(&self, out: &mut Vec<PointInstance>) {
        for mote in &self.motes {
            let t = mote.t;
            let pos = mote.anchor
                + Vec3::new(
                    (t * 0.5).sin() * 2.0,
                    (t * 0.3).cos() * 1.5,
                    (t * 0.2).sin() * 1.0,
                );
            let scale = 0.3 + (t * 2.0).sin() * 0.15;
            out.push(PointInstance {
                pos: pos.to_array(),
                scale,
                color: [MOTE_COLOR[0], MOTE_COLOR[1], MOTE_COLOR[2], MOTE_ALPHA],
                glow: 0.2,
            });
        }
    }
}
