use crate::dom::{EventListener, ListenOptions};
use folio_core::PositionTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer listeners feeding one tracker. Dropping this unregisters both.
pub struct PointerListeners {
    moved: Option<EventListener>,
    _left: Option<EventListener>,
}

impl PointerListeners {
    pub fn is_wired(&self) -> bool {
        self.moved.is_some()
    }
}

/// Track the pointer over the whole document.
///
/// Moves are taken from `window`, leaves from the root element. If either
/// listener cannot be installed the tracker just stays inactive and every
/// part rests at center.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    tracker: &Rc<RefCell<PositionTracker>>,
) -> PointerListeners {
    let on_move = {
        let tracker = tracker.clone();
        EventListener::new(window, "pointermove", ListenOptions::PASSIVE, move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                tracker
                    .borrow_mut()
                    .on_move(ev.client_x() as f32, ev.client_y() as f32);
            }
        })
    };

    let on_leave = document.document_element().and_then(|root| {
        let tracker = tracker.clone();
        EventListener::new(&root, "pointerleave", ListenOptions::default(), move |_| {
            tracker.borrow_mut().on_leave();
        })
    });

    if on_move.is_none() || on_leave.is_none() {
        log::warn!("[pointer] pointer tracking unavailable; follow parts stay centered");
    }
    PointerListeners {
        moved: on_move,
        _left: on_leave,
    }
}
