//! Scene sizing: per-device point budgets and their validation.

use crate::constants::{BELT_INNER_RADIUS, BELT_OUTER_RADIUS};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// Point counts for every generated layer plus the belt envelope.
///
/// Counts are fixed at scene creation; buffers never grow afterwards.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub starfield: usize,
    pub layer_far: usize,
    pub layer_mid: usize,
    pub layer_near: usize,
    pub bright_stars: usize,
    pub distant_galaxies: usize,
    pub companion_stars: usize,
    pub nebula_wisps: usize,
    pub nebula_clusters: usize,
    pub galaxy_dust: usize,
    pub asteroid_belt: usize,
    pub belt_inner_radius: f32,
    pub belt_outer_radius: f32,
    pub shooting_stars: usize,
    pub floating_particles: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("point count for {0} must be nonzero")]
    ZeroCount(&'static str),
    #[error("belt inner radius {inner} must be below outer radius {outer}")]
    InvertedBelt { inner: f32, outer: f32 },
}

impl SceneConfig {
    pub fn for_device(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => Self {
                starfield: 12_000,
                layer_far: 3_000,
                layer_mid: 2_000,
                layer_near: 1_500,
                bright_stars: 15,
                distant_galaxies: 4,
                companion_stars: 2_000,
                nebula_wisps: 120,
                nebula_clusters: 500,
                galaxy_dust: 400,
                asteroid_belt: 600,
                belt_inner_radius: BELT_INNER_RADIUS,
                belt_outer_radius: BELT_OUTER_RADIUS,
                shooting_stars: 6,
                floating_particles: 30,
            },
            DeviceClass::Mobile => Self {
                starfield: 5_000,
                layer_far: 1_000,
                layer_mid: 800,
                layer_near: 600,
                bright_stars: 8,
                distant_galaxies: 2,
                companion_stars: 1_000,
                nebula_wisps: 50,
                nebula_clusters: 250,
                galaxy_dust: 200,
                asteroid_belt: 300,
                belt_inner_radius: BELT_INNER_RADIUS,
                belt_outer_radius: BELT_OUTER_RADIUS,
                shooting_stars: 3,
                floating_particles: 15,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts: [(&'static str, usize); 12] = [
            ("starfield", self.starfield),
            ("layer_far", self.layer_far),
            ("layer_mid", self.layer_mid),
            ("layer_near", self.layer_near),
            ("bright_stars", self.bright_stars),
            ("distant_galaxies", self.distant_galaxies),
            ("companion_stars", self.companion_stars),
            ("nebula_wisps", self.nebula_wisps),
            ("nebula_clusters", self.nebula_clusters),
            ("galaxy_dust", self.galaxy_dust),
            ("asteroid_belt", self.asteroid_belt),
            ("shooting_stars", self.shooting_stars),
        ];
        for (name, count) in counts {
            if count == 0 {
                return Err(ConfigError::ZeroCount(name));
            }
        }
        if self.belt_inner_radius >= self.belt_outer_radius {
            return Err(ConfigError::InvertedBelt {
                inner: self.belt_inner_radius,
                outer: self.belt_outer_radius,
            });
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::Desktop)
    }
}
