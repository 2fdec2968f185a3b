/// Scene layout and animation tuning constants.
///
/// These constants express intended behavior (envelopes, rates, clamp
/// limits) and keep magic numbers out of the code.
use std::f32::consts::PI;

// Scene layout
pub const SOLAR_CENTER: [f32; 3] = [0.0, 0.0, -50.0];
pub const FOG_START: f32 = 100.0;
pub const FOG_END: f32 = 350.0;

// Camera rig
pub const CAMERA_BASE_Y: f32 = 5.0;
pub const CAMERA_BASE_Z: f32 = 20.0;
pub const CAMERA_RISE: f32 = 50.0; // rise up to y=55 at full scroll
pub const CAMERA_PULL_BACK: f32 = 20.0; // pull back to z=40 at full scroll
pub const SCROLL_FACTOR_PER_PX: f32 = 0.0005;
pub const CAMERA_SMOOTH_RATE: f32 = 1.5; // per-second convergence rate
pub const POINTER_LOOK_SPAN: f32 = 10.0; // world units of look-target sway
pub const POINTER_LOOK_DROP: f32 = 20.0; // bias look down as the camera rises
pub const CAMERA_FOVY: f32 = PI / 3.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 500.0;

// Starfield envelopes
pub const STARFIELD_SPAN_X: f32 = 300.0;
pub const STARFIELD_SPAN_Y: f32 = 200.0;
pub const STARFIELD_Z_NEAR: f32 = -20.0;
pub const STARFIELD_Z_DEPTH: f32 = 250.0;
pub const STARFIELD_SPIN_RATE: f32 = 0.001;
pub const TWINKLE_BASE_OPACITY: f32 = 0.8;
pub const TWINKLE_AMPLITUDE: f32 = 0.05;
pub const TWINKLE_RATE: f32 = 0.5;

// Asteroid belt (between Mars and Jupiter)
pub const BELT_INNER_RADIUS: f32 = 38.0;
pub const BELT_OUTER_RADIUS: f32 = 46.0;
pub const BELT_SPIN_RATE: f32 = 0.02;

// Shooting stars
pub const SHOOTING_TRAIL_LEN: usize = 20;
pub const SHOOTING_SPEED_MULT: f32 = 30.0;
pub const SHOOTING_REARM_PROBABILITY: f32 = 0.002;
pub const SHOOTING_FLOOR_Y: f32 = -50.0;

// Comet
pub const COMET_TRAIL_LEN: usize = 50;
pub const COMET_ORBIT_A: f32 = 80.0; // semi-major axis
pub const COMET_ORBIT_B: f32 = 40.0; // semi-minor axis
pub const COMET_SPEED: f32 = 0.15;
pub const COMET_TIME_SCALE: f32 = 0.3;
pub const COMET_REST_SEC: f32 = 5.0; // linger past one orbit before re-arming
pub const COMET_MAX_DELAY_SEC: f32 = 60.0;

// Cinematic intro timeline (seconds)
pub const INTRO_BLACK_END: f32 = 1.0;
pub const INTRO_QUOTE_END: f32 = 5.0;
pub const INTRO_FADE_END: f32 = 6.5;

// Floating quotes
pub const QUOTE_FIRST_DELAY: f32 = 30.0;
pub const QUOTE_VISIBLE: f32 = 8.0;
pub const QUOTE_INTERVAL: f32 = 60.0;

// Story reveal: fraction of the viewport height around its center within
// which a section is fully revealed, and the fade band beyond it.
pub const REVEAL_FULL_BAND: f32 = 0.2;
pub const REVEAL_FADE_BAND: f32 = 0.5;

// Audio
pub const AUDIO_VOLUME: f64 = 0.5;
