//! Background music: one looping track, a play/pause toggle, and
//! autoplay-policy handling. A rejected `play()` is logged and the track
//! stays paused until the first user gesture retries it.

use app_core::hud::PlaybackState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct MusicPlayer {
    element: web::HtmlAudioElement,
    pub state: RefCell<PlaybackState>,
}

impl MusicPlayer {
    pub fn new(src: &str) -> Result<Rc<Self>, ()> {
        let element = match web::HtmlAudioElement::new_with_src(src) {
            Ok(el) => el,
            Err(e) => {
                log::error!("audio element error: {:?}", e);
                return Err(());
            }
        };
        element.set_loop(true);
        element.set_volume(app_core::AUDIO_VOLUME);
        Ok(Rc::new(Self {
            element,
            state: RefCell::new(PlaybackState::default()),
        }))
    }

    pub fn pause(&self) {
        let _ = self.element.pause();
        self.state.borrow_mut().set_playing(false);
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().is_playing()
    }

    pub fn label(&self) -> &'static str {
        self.state.borrow().label()
    }
}

/// Ask the platform to start playback. Autoplay denial leaves the state
/// paused; a later user gesture retries.
pub fn try_play(player: &Rc<MusicPlayer>) {
    match player.element.play() {
        Ok(promise) => {
            let player = player.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => player.state.borrow_mut().set_playing(true),
                    Err(e) => {
                        log::warn!("autoplay prevented, waiting for interaction: {:?}", e);
                        player.state.borrow_mut().set_playing(false);
                    }
                }
            });
        }
        Err(e) => log::warn!("audio play error: {:?}", e),
    }
}

pub fn toggle(player: &Rc<MusicPlayer>) {
    if player.is_playing() {
        player.pause();
    } else {
        try_play(player);
    }
}

/// Retry playback on the first click/keydown/scroll, then disarm. This is
/// the escape hatch for autoplay policies that reject the initial play.
pub fn wire_autoplay_unlock(player: Rc<MusicPlayer>, window: &web::Window) {
    let fired = Rc::new(Cell::new(false));
    for event in ["click", "keydown", "scroll"] {
        let player = player.clone();
        let fired = fired.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if fired.replace(true) {
                return;
            }
            if !player.is_playing() {
                try_play(&player);
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
