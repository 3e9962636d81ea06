use crate::constants::PART_ATTR;
use crate::dom;
use crate::events::{self, LayoutListeners, PointerListeners};
use crate::frame::{self, FrameCallback, RafScheduler};
use anyhow::anyhow;
use folio_core::{
    FollowLoop, FollowOptions, MultiPartComposer, PositionTracker, RectCache, Sizing,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Composer = MultiPartComposer<web::HtmlElement>;

/// A live pointer-follow assembly bound to one container element.
///
/// Owns its tracker, rect cache, listeners and frame subscription; dropping
/// it (or calling [`FollowMount::dispose`]) tears all of them down.
pub struct FollowMount {
    frame_loop: Rc<RefCell<FollowLoop<RafScheduler>>>,
    composer: Rc<RefCell<Composer>>,
    sizing: Rc<Cell<Sizing>>,
    callback: FrameCallback,
    _pointer: PointerListeners,
    _layout: LayoutListeners,
}

impl FollowMount {
    pub fn mount(container: &web::HtmlElement, options: &FollowOptions) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;

        let mut parts = Vec::new();
        for spec in options.validate()? {
            let el = find_part(container, &spec.name)
                .ok_or_else(|| anyhow!("missing [{}=\"{}\"] element", PART_ATTR, spec.name))?;
            _ = el.style().set_property("will-change", "transform");
            parts.push((spec, el));
        }
        let sizing = Rc::new(Cell::new(options.sizing()));
        let composer = Rc::new(RefCell::new(MultiPartComposer::new(
            parts,
            sizing.get().initial(),
        )?));

        let tracker = Rc::new(RefCell::new(PositionTracker::new()));
        let rects = Rc::new(RefCell::new(RectCache::new()));
        let pointer = events::wire_pointer(&window, &document, &tracker);
        let layout = {
            let composer = composer.clone();
            let sizing = sizing.clone();
            events::wire_layout(&window, container, &rects, move |rect| {
                let Some(size) = sizing.get().measure(rect) else {
                    return;
                };
                if let Err(e) = composer.borrow_mut().set_reference_size(size) {
                    log::warn!("[follow] ignoring measured size {}: {}", size, e);
                }
            })
        };

        let callback = frame::frame_callback();
        let frame_loop = Rc::new(RefCell::new(FollowLoop::new(RafScheduler::new(
            window,
            callback.clone(),
        ))));
        {
            let composer = composer.clone();
            frame_loop.borrow().tick_slot().set(move |offset| {
                composer
                    .borrow_mut()
                    .tick(offset, |el, transform| dom::set_transform(el, &transform));
            });
        }
        {
            let frame_loop = frame_loop.clone();
            frame::install(&callback, move || {
                let rect = rects.borrow().rect();
                let sample = *tracker.borrow();
                frame_loop.borrow_mut().tick(&sample, &rect);
            });
        }
        frame_loop.borrow_mut().start();

        log::info!(
            "[follow] mounted {} parts, {:?} (pointer {})",
            composer.borrow().len(),
            sizing.get(),
            if pointer.is_wired() { "tracked" } else { "unavailable" }
        );
        Ok(Self {
            frame_loop,
            composer,
            sizing,
            callback,
            _pointer: pointer,
            _layout: layout,
        })
    }

    /// Rescale ratio-based parts for the assembly's new rendered size. The
    /// size stays pinned; container resizes no longer change it.
    pub fn set_reference_size(&self, size: f32) -> anyhow::Result<()> {
        self.composer.borrow_mut().set_reference_size(size)?;
        self.sizing.set(Sizing::Fixed(size));
        Ok(())
    }

    /// Stop the frame loop and release the frame closure. Listeners go with
    /// the mount itself.
    pub fn dispose(&mut self) {
        self.frame_loop.borrow_mut().cancel();
        self.callback.borrow_mut().take();
    }
}

impl Drop for FollowMount {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn find_part(container: &web::HtmlElement, name: &str) -> Option<web::HtmlElement> {
    let selector = format!("[{}=\"{}\"]", PART_ATTR, name);
    container
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
