//! The per-frame tick: sample input, step the scene, refresh the DOM
//! overlays, and render.

use crate::input::InputState;
use crate::overlay;
use crate::render;
use app_core::{FrameInput, PlanetFactsMap, PointInstance, Scene, SceneUniforms};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub facts: PlanetFactsMap,
    pub canvas: web::HtmlCanvasElement,
    pub input: Rc<RefCell<InputState>>,
    pub story_sections: Vec<web::HtmlElement>,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub hovered: Option<&'static str>,
    instances: Vec<PointInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Scene,
        facts: PlanetFactsMap,
        canvas: web::HtmlCanvasElement,
        input: Rc<RefCell<InputState>>,
        story_sections: Vec<web::HtmlElement>,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let capacity = scene.instance_capacity();
        Self {
            scene,
            facts,
            canvas,
            input,
            story_sections,
            gpu,
            last_instant: Instant::now(),
            hovered: None,
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(0.1); // tab-switch guard

        let snapshot = *self.input.borrow();
        self.scene.step(&FrameInput {
            dt_sec,
            scroll_px: snapshot.scroll_px,
            pointer_ndc: snapshot.pointer_ndc,
        });

        let width = self.canvas.width().max(1);
        let height = self.canvas.height().max(1);
        let aspect = width as f32 / height as f32;

        // Hover picking + info card
        let hovered = snapshot
            .pointer_active
            .then(|| self.scene.pick_body(aspect, snapshot.pointer_ndc))
            .flatten();
        if hovered != self.hovered {
            self.hovered = hovered;
        }
        if let Some(document) = crate::dom::window_document() {
            match self
                .hovered
                .and_then(|name| self.facts.get(name).map(|f| (name, *f)))
            {
                Some((name, facts)) => overlay::show_planet_card(
                    &document,
                    name,
                    &facts,
                    snapshot.pointer_css.x,
                    snapshot.pointer_css.y,
                ),
                None => overlay::hide_planet_card(&document),
            }

            // Narrative overlays
            if let Some(window) = web::window() {
                let (_, viewport_h) = crate::dom::viewport_size(&window);
                overlay::update_story(&self.story_sections, viewport_h);
            }
            let elapsed = self.scene.elapsed();
            overlay::update_intro(&document, app_core::intro_phase(elapsed));
            overlay::update_floating_quote(
                &document,
                self.scene.quotes.visible(elapsed),
                self.scene.quotes.quote(elapsed),
            );
        }

        // Render
        self.scene.build_instances(&mut self.instances);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let (right, up) = self.scene.camera.billboard_axes();
            let uniforms = SceneUniforms {
                view_proj: self.scene.camera.view_proj(aspect).to_cols_array_2d(),
                cam_right: [right.x, right.y, right.z, 0.0],
                cam_up: [up.x, up.y, up.z, 0.0],
                fog: [app_core::FOG_START, app_core::FOG_END, 0.0, 0.0],
            };
            if let Err(e) = g.render(&self.instances, &uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
