use crate::constants::{HERO_FADE_ATTR, HERO_INDICATOR_ATTR, HERO_OVERLAY_ATTR};
use crate::dom::{self, EventListener, ListenOptions};
use folio_core::HeroFade;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Scroll-driven fade of the hero section. Returns `None` when the page has
/// no hero elements.
pub fn wire_hero_fade(window: &web::Window, document: &web::Document) -> Option<EventListener> {
    let root = document.document_element()?;
    let content = dom::html_elements(&root, &format!("[{}]", HERO_FADE_ATTR));
    let indicators = dom::html_elements(&root, &format!("[{}]", HERO_INDICATOR_ATTR));
    let overlays = dom::html_elements(&root, &format!("[{}]", HERO_OVERLAY_ATTR));
    if content.is_empty() && indicators.is_empty() && overlays.is_empty() {
        return None;
    }

    let last_content = Rc::new(Cell::new(f32::NAN));
    let update = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
            let fade = HeroFade::from_scroll(scroll_y, dom::viewport(&window).height);

            let prev = last_content.get();
            if prev.is_nan() || HeroFade::content_changed(prev, fade.content_opacity) {
                last_content.set(fade.content_opacity);
                let visibility = if fade.content_visible() { "visible" } else { "hidden" };
                for el in &content {
                    dom::set_opacity(el, fade.content_opacity.max(0.0));
                    _ = el.style().set_property("visibility", visibility);
                }
            }
            let pointer_events = if fade.indicator_interactive() { "auto" } else { "none" };
            for el in &indicators {
                dom::set_opacity(el, fade.indicator_opacity);
                _ = el.style().set_property("pointer-events", pointer_events);
            }
            for el in &overlays {
                dom::set_opacity(el, fade.overlay_opacity);
            }
        }
    };

    update();
    EventListener::new(window, "scroll", ListenOptions::PASSIVE, move |_| update())
}
