use folio_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cell holding the frame callback. The scheduler re-arms it every tick;
/// emptying the cell releases the closure and everything it captured.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn frame_callback() -> FrameCallback {
    Rc::new(RefCell::new(None))
}

/// Install `body` as the closure run on every animation frame.
pub fn install(cell: &FrameCallback, body: impl FnMut() + 'static) {
    *cell.borrow_mut() = Some(Closure::wrap(Box::new(body) as Box<dyn FnMut()>));
}

/// `requestAnimationFrame` / `cancelAnimationFrame` behind the core's
/// scheduler trait.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}
