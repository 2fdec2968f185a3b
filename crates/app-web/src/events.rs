//! Event wiring: scroll, pointer, touch, keyboard, and the two HUD
//! buttons. Listeners live for the page's lifetime.

use crate::audio::MusicPlayer;
use crate::constants::{AUDIO_BUTTON_ID, FULLSCREEN_BUTTON_ID};
use crate::dom;
use crate::input::{self, InputState};
use app_core::hud::FullscreenState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, state: Rc<RefCell<InputState>>) {
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        state.borrow_mut().scroll_px = input::window_scroll_y(&win);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer(window: &web::Window, state: Rc<RefCell<InputState>>) {
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        let mut s = state.borrow_mut();
        s.pointer_ndc = input::client_to_ndc(&win, x, y);
        s.pointer_css = Vec2::new(x, y);
        s.pointer_active = true;
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_touch(window: &web::Window, state: Rc<RefCell<InputState>>) {
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let (x, y) = (touch.client_x() as f32, touch.client_y() as f32);
            let mut s = state.borrow_mut();
            s.pointer_ndc = input::client_to_ndc(&win, x, y);
            s.pointer_css = Vec2::new(x, y);
            s.pointer_active = true;
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_fullscreen(document: &web::Document) {
    if let Some(root) = document.document_element() {
        if let Err(e) = root.request_fullscreen() {
            // platform denial: stay windowed, fullscreenchange never fires
            log::warn!("fullscreen request rejected: {:?}", e);
        }
    }
}

fn toggle_fullscreen(document: &web::Document) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else {
        request_fullscreen(document);
    }
}

/// Fullscreen button plus the `fullscreenchange` listener that keeps the
/// button label honest even when the platform denies or force-exits.
pub fn wire_fullscreen(document: &web::Document, fs_state: Rc<RefCell<FullscreenState>>) {
    {
        let doc = document.clone();
        dom::add_click_listener(document, FULLSCREEN_BUTTON_ID, move || {
            toggle_fullscreen(&doc);
        });
    }

    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let active = doc.fullscreen_element().is_some();
        fs_state.borrow_mut().set_active(active);
        if let Some(btn) = doc.get_element_by_id(FULLSCREEN_BUTTON_ID) {
            let label = fs_state.borrow().label();
            let _ = btn.set_attribute("aria-label", label);
            let _ = btn.set_attribute("title", label);
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("fullscreenchange", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_audio_button(document: &web::Document, player: Rc<MusicPlayer>) {
    let doc = document.clone();
    dom::add_click_listener(document, AUDIO_BUTTON_ID, move || {
        crate::audio::toggle(&player);
        if let Some(btn) = doc.get_element_by_id(AUDIO_BUTTON_ID) {
            let _ = btn.set_attribute("aria-label", player.label());
            let _ = btn.set_attribute("title", player.label());
        }
    });
}

/// Global keys: Enter toggles fullscreen, Escape exits, `m` toggles music.
pub fn wire_global_keydown(document: &web::Document, player: Rc<MusicPlayer>) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" => {
                        toggle_fullscreen(&doc);
                        ev.prevent_default();
                    }
                    "Escape" => {
                        doc.exit_fullscreen();
                    }
                    "m" | "M" => {
                        crate::audio::toggle(&player);
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
