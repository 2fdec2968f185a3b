//! DOM overlays: the scrolling story sections, the cinematic intro, the
//! floating quote, and the planet info card.

use crate::constants::{
    CARD_OFFSET_X, CARD_OFFSET_Y, FLOATING_QUOTE_ID, INTRO_AUTHOR_ID, INTRO_OVERLAY_ID,
    INTRO_QUOTE_ID, PLANET_CARD_ID, REVEAL_SLIDE_PX, STORY_CONTAINER_ID,
};
use app_core::story::{reveal_progress, Alignment, IntroPhase, Quote};
use app_core::{PlanetFacts, STORY};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build one `<section>` per story segment inside `#story` and return the
/// elements for per-frame reveal updates.
pub fn build_story(document: &web::Document) -> Vec<web::HtmlElement> {
    let mut sections = Vec::with_capacity(STORY.len());
    let Some(container) = document.get_element_by_id(STORY_CONTAINER_ID) else {
        log::warn!("missing #{STORY_CONTAINER_ID}; story overlay disabled");
        return sections;
    };
    for segment in STORY {
        let Ok(section) = document.create_element("section") else {
            continue;
        };
        let align = match segment.alignment {
            Alignment::Left => "align-left",
            Alignment::Center => "align-center",
            Alignment::Right => "align-right",
        };
        section.set_class_name(&format!("story-section {align}"));
        let _ = section.set_attribute("data-segment", segment.id);
        for paragraph in segment.paragraphs {
            if let Ok(p) = document.create_element("p") {
                p.set_text_content(Some(paragraph));
                let _ = section.append_child(&p);
            }
        }
        let _ = container.append_child(&section);
        if let Some(el) = section.dyn_ref::<web::HtmlElement>() {
            sections.push(el.clone());
        }
    }
    sections
}

/// Fade and slide each section by its reveal progress.
pub fn update_story(sections: &[web::HtmlElement], viewport_h: f32) {
    for section in sections {
        let rect = section.get_bounding_client_rect();
        let progress = reveal_progress(rect.top() as f32, rect.height() as f32, viewport_h, 0.0);
        let style = section.style();
        let _ = style.set_property("opacity", &format!("{progress:.3}"));
        let _ = style.set_property(
            "transform",
            &format!("translateY({:.1}px)", (1.0 - progress) * REVEAL_SLIDE_PX),
        );
    }
}

/// Put the chosen quote into the intro overlay once, at startup.
pub fn set_intro_quote(document: &web::Document, quote: &Quote) {
    crate::dom::set_text(document, INTRO_QUOTE_ID, &format!("\u{201c}{}\u{201d}", quote.text));
    crate::dom::set_text(document, INTRO_AUTHOR_ID, &format!("\u{2014} {}", quote.author));
}

/// Drive the intro overlay through its timed phases via CSS classes.
pub fn update_intro(document: &web::Document, phase: IntroPhase) {
    let Some(el) = document.get_element_by_id(INTRO_OVERLAY_ID) else {
        return;
    };
    let class = match phase {
        IntroPhase::Black => "intro black",
        IntroPhase::Quote => "intro quote",
        IntroPhase::FadeOut => "intro fade-out",
        IntroPhase::Done => "intro hidden",
    };
    if el.class_name() != class {
        el.set_class_name(class);
    }
}

pub fn update_floating_quote(document: &web::Document, visible: bool, quote: &Quote) {
    let Some(el) = document.get_element_by_id(FLOATING_QUOTE_ID) else {
        return;
    };
    let cl = el.class_list();
    if visible {
        el.set_inner_html(&format!(
            "<p class='floating-quote-text'>\u{201c}{}\u{201d}</p><p class='floating-quote-author'>\u{2014} {}</p>",
            quote.text, quote.author
        ));
        let _ = cl.add_1("visible");
    } else {
        let _ = cl.remove_1("visible");
    }
}

/// Show the facts card for a hovered body near the pointer.
pub fn show_planet_card(
    document: &web::Document,
    name: &str,
    facts: &PlanetFacts,
    pointer_css_x: f32,
    pointer_css_y: f32,
) {
    let Some(el) = document.get_element_by_id(PLANET_CARD_ID) else {
        return;
    };
    el.set_inner_html(&format!(
        "<h3>{name}</h3>\
         <div class='stat'><span>Distance from Sun</span><span>{}</span></div>\
         <div class='stat'><span>Diameter</span><span>{}</span></div>\
         <div class='stat'><span>Day Length</span><span>{}</span></div>\
         <p class='planet-fact'>{}</p>",
        facts.distance_from_sun, facts.diameter, facts.day_length, facts.fact
    ));
    if let Some(div) = el.dyn_ref::<web::HtmlElement>() {
        let style = div.style();
        let _ = style.set_property("left", &format!("{:.0}px", pointer_css_x + CARD_OFFSET_X));
        let _ = style.set_property("top", &format!("{:.0}px", pointer_css_y + CARD_OFFSET_Y));
    }
    let _ = el.class_list().add_1("visible");
}

pub fn hide_planet_card(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PLANET_CARD_ID) {
        let _ = el.class_list().remove_1("visible");
    }
}
