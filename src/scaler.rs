use crate::dom;
use crate::frame::{self, FrameCallback, RafScheduler};
use anyhow::anyhow;
use folio_core::{DistanceScaler, FrameDriver, ScalerConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Distance-based scale/deform bound to one element.
pub struct ScalerMount {
    driver: Rc<RefCell<FrameDriver<RafScheduler>>>,
    callback: FrameCallback,
    observer: Option<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>,
}

impl ScalerMount {
    pub fn mount(el: &web::HtmlElement, config: ScalerConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let scaler = Rc::new(RefCell::new(DistanceScaler::new(config)?));

        _ = el.style().set_property("will-change", "transform");
        if config.deform {
            _ = el.style().set_property("transform-style", "preserve-3d");
        }

        let observer = observe_visibility(el, &scaler);
        if observer.is_none() {
            // no IntersectionObserver: run every frame
            log::warn!("[scaler] visibility tracking unavailable; scaling continuously");
            scaler.borrow_mut().set_visible(true);
        }

        let callback = frame::frame_callback();
        let driver = Rc::new(RefCell::new(FrameDriver::new(RafScheduler::new(
            window.clone(),
            callback.clone(),
        ))));
        {
            let driver = driver.clone();
            let el = el.clone();
            frame::install(&callback, move || {
                if !driver.borrow_mut().begin_tick() {
                    return;
                }
                let rect = dom::element_rect(&el);
                let viewport = dom::viewport(&window);
                if let Some(transform) = scaler.borrow_mut().tick(&rect, &viewport) {
                    dom::set_transform(&el, &transform);
                }
                driver.borrow_mut().end_tick();
            });
        }
        driver.borrow_mut().start();

        log::info!("[scaler] mounted ({:?})", config.axis_mode());
        Ok(Self {
            driver,
            callback,
            observer,
        })
    }

    pub fn dispose(&mut self) {
        self.driver.borrow_mut().cancel();
        self.callback.borrow_mut().take();
        if let Some((observer, _closure)) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for ScalerMount {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn observe_visibility(
    el: &web::HtmlElement,
    scaler: &Rc<RefCell<DistanceScaler>>,
) -> Option<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> {
    let scaler = scaler.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            scaler.borrow_mut().set_visible(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref()).ok()?;
    observer.observe(el);
    Some((observer, closure))
}
