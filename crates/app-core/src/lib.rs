pub mod belt;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod drift;
pub mod hud;
pub mod nebula;
pub mod pick;
pub mod points;
pub mod scene;
pub mod solar;
pub mod starfield;
pub mod story;
pub mod transient;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::{Camera, CameraRig};
pub use config::{ConfigError, DeviceClass, SceneConfig};
pub use constants::*;
pub use points::{PointCloud, PointInstance, SceneUniforms};
pub use scene::{FrameInput, Scene};
pub use solar::{
    planet_facts, PlanetFacts, PlanetFactsMap, PlanetSpec, SolarSystem, PLANETS, SUN_NAME,
};
pub use story::{
    intro_phase, reveal_progress, Alignment, IntroPhase, Quote, QuoteTicker, StorySegment, QUOTES,
    STORY,
};
