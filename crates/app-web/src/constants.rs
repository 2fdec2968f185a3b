// DOM ids and web-side layout tuning.

pub const CANVAS_ID: &str = "scene-canvas";
pub const STORY_CONTAINER_ID: &str = "story";
pub const INTRO_OVERLAY_ID: &str = "intro-overlay";
pub const INTRO_QUOTE_ID: &str = "intro-quote";
pub const INTRO_AUTHOR_ID: &str = "intro-author";
pub const FLOATING_QUOTE_ID: &str = "floating-quote";
pub const PLANET_CARD_ID: &str = "planet-card";
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreen-btn";
pub const AUDIO_BUTTON_ID: &str = "audio-btn";

pub const AUDIO_TRACK_SRC: &str = "/audio/background.mp3";

// Info card offset from the pointer (CSS pixels)
pub const CARD_OFFSET_X: f32 = 20.0;
pub const CARD_OFFSET_Y: f32 = -100.0;

// Story reveal slide distance (CSS pixels)
pub const REVEAL_SLIDE_PX: f32 = 30.0;

// Mobile breakpoint, matching the stylesheet
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
