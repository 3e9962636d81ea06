use crate::dom::{self, EventListener, ListenOptions};
use folio_core::{ContainerRect, RectCache};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize/scroll listeners keeping one rect cache fresh.
pub struct LayoutListeners {
    _resize: Option<EventListener>,
    _scroll: Option<EventListener>,
}

/// Measure `container` now and again on every resize or scroll, handing
/// each fresh rect to `on_measure` after the cache is updated.
///
/// Scroll is captured at the window so scrolling inside nested containers
/// refreshes the cache too.
pub fn wire_layout(
    window: &web::Window,
    container: &web::Element,
    cache: &Rc<RefCell<RectCache>>,
    on_measure: impl Fn(&ContainerRect) + 'static,
) -> LayoutListeners {
    let measure = {
        let container = container.clone();
        let cache = cache.clone();
        let on_measure = Rc::new(on_measure);
        move || {
            let rect = dom::element_rect(&container);
            cache.borrow_mut().refresh(rect);
            on_measure(&rect);
        }
    };
    measure();

    let refresh = move |_: web::Event| measure();

    LayoutListeners {
        _resize: EventListener::new(window, "resize", ListenOptions::PASSIVE, refresh.clone()),
        _scroll: EventListener::new(window, "scroll", ListenOptions::CAPTURE_PASSIVE, refresh),
    }
}
