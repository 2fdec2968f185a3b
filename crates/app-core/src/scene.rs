//! Scene assembly: every visual component behind one `step` and one
//! instance-list build. Components own their buffers exclusively; the
//! camera rig receives scroll/pointer input explicitly each frame.

use crate::belt::asteroid_belt;
use crate::camera::CameraRig;
use crate::config::{ConfigError, SceneConfig};
use crate::drift::FloatingMotes;
use crate::nebula::{companion_galaxy, distant_galaxy, galaxy_dust, nebula_clusters, nebula_wisps};
use crate::pick;
use crate::points::{PointCloud, PointInstance};
use crate::solar::SolarSystem;
use crate::starfield::{star_layer, BrightStars, Starfield};
use crate::story::QuoteTicker;
use crate::transient::{Comet, ShootingStarField};
use glam::Vec2;
use rand::prelude::*;

/// Per-frame input sampled by the front-end.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub dt_sec: f32,
    pub scroll_px: f32,
    pub pointer_ndc: Vec2,
}

pub struct Scene {
    pub config: SceneConfig,
    pub camera: CameraRig,
    pub solar: SolarSystem,
    pub quotes: QuoteTicker,
    starfield: Starfield,
    layers: [PointCloud; 3],
    bright: BrightStars,
    galaxies: Vec<PointCloud>,
    companion: PointCloud,
    wisps: PointCloud,
    clusters: PointCloud,
    dust: PointCloud,
    belt: PointCloud,
    shooting: ShootingStarField,
    comet: Comet,
    motes: FloatingMotes,
    rng: StdRng,
    elapsed: f32,
}

// Derive per-component RNGs from the base seed so each layer can be
// regenerated independently and tests stay reproducible.
fn component_rng(seed: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

impl Scene {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let starfield = Starfield::generate(config.starfield, &mut component_rng(seed, 1));
        let mut layer_rng = component_rng(seed, 2);
        let layers = [
            star_layer(config.layer_far, -300.0, 0.0005, 0.08, 0.4, &mut layer_rng),
            star_layer(config.layer_mid, -200.0, 0.001, 0.1, 0.6, &mut layer_rng),
            star_layer(config.layer_near, -100.0, 0.002, 0.12, 0.8, &mut layer_rng),
        ];
        let bright = BrightStars::generate(config.bright_stars, &mut component_rng(seed, 3));
        let mut galaxy_rng = component_rng(seed, 4);
        let galaxies = (0..config.distant_galaxies)
            .map(|_| distant_galaxy(&mut galaxy_rng))
            .collect::<Vec<_>>();
        let companion = companion_galaxy(config.companion_stars, &mut component_rng(seed, 5));
        let wisps = nebula_wisps(config.nebula_wisps, &mut component_rng(seed, 6));
        let clusters = nebula_clusters(config.nebula_clusters, &mut component_rng(seed, 7));
        let dust = galaxy_dust(config.galaxy_dust, &mut component_rng(seed, 8));
        let belt = asteroid_belt(
            config.asteroid_belt,
            config.belt_inner_radius,
            config.belt_outer_radius,
            &mut component_rng(seed, 9),
        );
        let solar = SolarSystem::new(&mut component_rng(seed, 10));
        let mut transient_rng = component_rng(seed, 11);
        let shooting = ShootingStarField::new(config.shooting_stars, &mut transient_rng);
        let comet = Comet::new(&mut transient_rng);
        let motes = FloatingMotes::new(config.floating_particles, &mut component_rng(seed, 12));
        let quotes = QuoteTicker::new(component_rng(seed, 13).gen_range(0..crate::story::QUOTES.len()));

        let scene = Self {
            config,
            camera: CameraRig::new(),
            solar,
            quotes,
            starfield,
            layers,
            bright,
            galaxies,
            companion,
            wisps,
            clusters,
            dust,
            belt,
            shooting,
            comet,
            motes,
            rng: transient_rng,
            elapsed: 0.0,
        };
        log::debug!(
            "scene built: {} sprite instances across {} layers",
            scene.instance_capacity(),
            8 + scene.galaxies.len()
        );
        Ok(scene)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn step(&mut self, input: &FrameInput) {
        let dt = input.dt_sec;
        self.elapsed += dt;

        self.camera.set_scroll(input.scroll_px);
        self.camera.set_pointer(input.pointer_ndc);
        self.camera.step(dt);

        self.starfield.step(dt);
        for layer in &mut self.layers {
            layer.advance(dt);
        }
        self.bright.step(dt);
        for galaxy in &mut self.galaxies {
            galaxy.advance(dt);
        }
        self.wisps.advance(dt);
        self.clusters.advance(dt);
        self.dust.advance(dt);
        self.belt.advance(dt);
        self.solar.step(dt);
        self.shooting.step(dt, &mut self.rng);
        self.comet.step(dt, &mut self.rng);
        self.motes.step(dt);
    }

    /// Upper bound on instances a frame can emit; fixed at creation.
    pub fn instance_capacity(&self) -> usize {
        self.starfield.cloud.len()
            + self.layers.iter().map(PointCloud::len).sum::<usize>()
            + self.bright.core.len()
            + self.bright.halo.len()
            + self.galaxies.iter().map(PointCloud::len).sum::<usize>()
            + self.companion.len()
            + self.wisps.len()
            + self.clusters.len()
            + self.dust.len()
            + self.belt.len()
            + self.solar.instance_count()
            + self.shooting.instance_capacity()
            + self.comet.instance_capacity()
            + self.motes.len()
    }

    /// Rebuild the draw list, far layers first.
    pub fn build_instances(&self, out: &mut Vec<PointInstance>) {
        out.clear();
        for layer in &self.layers {
            layer.append_instances(out);
        }
        for galaxy in &self.galaxies {
            galaxy.append_instances(out);
        }
        self.companion.append_instances(out);
        self.wisps.append_instances(out);
        self.clusters.append_instances(out);
        self.starfield.cloud.append_instances(out);
        self.bright.halo.append_instances(out);
        self.bright.core.append_instances(out);
        self.dust.append_instances(out);
        self.belt.append_instances(out);
        self.solar.append_instances(out);
        self.shooting.append_instances(out);
        self.comet.append_instances(out);
        self.motes.append_instances(out);
    }

    /// Ray-pick the solar body under the pointer, if any.
    pub fn pick_body(&self, aspect: f32, pointer_ndc: Vec2) -> Option<&'static str> {
        let (origin, dir) = self.camera.screen_ray(aspect, pointer_ndc);
        pick::pick_body(origin, dir, &self.solar)
    }
}
