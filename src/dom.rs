use folio_core::{ContainerRect, Transform, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Copy the four numbers we need out of the element's `DomRect`.
#[inline]
pub fn element_rect(el: &web::Element) -> ContainerRect {
    let r = el.get_bounding_client_rect();
    ContainerRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Viewport size, or an empty viewport if the window cannot report it.
pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, transform: &Transform) {
    _ = el.style().set_property("transform", &transform.to_css());
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    _ = el.style().set_property("opacity", &opacity.to_string());
}

/// `querySelectorAll` collected into `HtmlElement`s, skipping non-HTML nodes.
pub fn html_elements(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[derive(Clone, Copy, Default)]
pub struct ListenOptions {
    pub capture: bool,
    pub passive: bool,
}

impl ListenOptions {
    pub const PASSIVE: Self = Self {
        capture: false,
        passive: true,
    };
    pub const CAPTURE_PASSIVE: Self = Self {
        capture: true,
        passive: true,
    };
}

/// A registered DOM event listener, removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Register `handler`; returns `None` if the host rejects the listener.
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        options: ListenOptions,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_capture(options.capture);
        opts.set_passive(options.passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[dom] could not listen for `{}`: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            capture: options.capture,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}
