#![cfg(target_arch = "wasm32")]
use app_core::{DeviceClass, Scene, SceneConfig, QUOTES};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{AUDIO_TRACK_SRC, CANVAS_ID, MOBILE_MAX_WIDTH};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn detect_device_class(window: &web::Window) -> DeviceClass {
    let narrow = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w < MOBILE_MAX_WIDTH)
        .unwrap_or(false);
    let mobile_agent = window
        .navigator()
        .user_agent()
        .map(|ua| {
            ["Android", "iPhone", "iPad", "iPod", "Mobile", "webOS"]
                .iter()
                .any(|needle| ua.contains(needle))
        })
        .unwrap_or(false);
    if narrow || mobile_agent {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Build the scene for this device class
    let device_class = detect_device_class(&window);
    let config = SceneConfig::for_device(device_class);
    let seed = js_sys::Date::now() as u64;
    let scene = Scene::new(config, seed).map_err(|e| anyhow::anyhow!("scene config: {e}"))?;
    log::info!(
        "[scene] class={:?} seed={} instances={}",
        device_class,
        seed,
        scene.instance_capacity()
    );

    // Narrative overlays
    let story_sections = overlay::build_story(&document);
    let intro_pick = (js_sys::Math::random() * QUOTES.len() as f64).floor() as usize;
    overlay::set_intro_quote(&document, &QUOTES[intro_pick.min(QUOTES.len() - 1)]);

    // Background music: try at once, fall back to the first user gesture
    if let Ok(player) = audio::MusicPlayer::new(AUDIO_TRACK_SRC) {
        audio::try_play(&player);
        audio::wire_autoplay_unlock(player.clone(), &window);
        events::wire_audio_button(&document, player.clone());
        events::wire_global_keydown(&document, player);
    }

    // Fullscreen control
    let fullscreen_state = Rc::new(RefCell::new(app_core::hud::FullscreenState::default()));
    events::wire_fullscreen(&document, fullscreen_state);

    // Input listeners feeding the camera rig
    let input_state = Rc::new(RefCell::new(input::InputState::default()));
    events::wire_scroll(&window, input_state.clone());
    events::wire_pointer(&window, input_state.clone());
    events::wire_touch(&window, input_state.clone());

    // WebGPU renderer sized to the scene's fixed instance budget
    let gpu = frame::init_gpu(&canvas, scene.instance_capacity()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        app_core::planet_facts(),
        canvas,
        input_state,
        story_sections,
        gpu,
    )));
    frame::start_loop(frame_ctx);

    Ok(())
}
